use sea_orm::Set;
use tracing::{debug, info};

use crate::{
    entities::{movie, person},
    error::AppResult,
    store::MovieStore,
};

/// Populates the catalog on first start. Skipped entirely when any of the
/// three tables already holds rows, so repeated starts are no-ops.
pub async fn seed_if_empty(store: &MovieStore) -> AppResult<()> {
    if !store.is_empty().await? {
        debug!("catalog already populated, skipping seed");
        return Ok(());
    }

    info!(
        genres = GENRES.len(),
        movies = MOVIES.len(),
        people = PEOPLE.len(),
        "seeding catalog"
    );

    for name in GENRES {
        store.insert_genre(name).await?;
    }

    let movies = MOVIES
        .iter()
        .map(|&(title, released, rating, summary, tagline)| movie::ActiveModel {
            title: Set(title.to_string()),
            released: Set(released),
            rating: Set(Some(rating)),
            summary: Set(Some(summary.to_string())),
            tagline: Set(tagline.map(str::to_string)),
            is_favorite: Set(false),
            ..Default::default()
        })
        .collect();
    store.insert_movies(movies).await?;

    let people = PEOPLE
        .iter()
        .map(|&(name, birthday)| person::ActiveModel {
            name: Set(name.to_string()),
            birthday: Set(birthday),
            ..Default::default()
        })
        .collect();
    store.insert_people(people).await?;

    Ok(())
}

const GENRES: [&str; 10] = [
    "Action",
    "Drama",
    "Comedy",
    "Sci-Fi",
    "Thriller",
    "Crime",
    "Romance",
    "Adventure",
    "Biography",
    "Family",
];

/// (title, released, rating, summary, tagline)
const MOVIES: [(&str, i32, i32, &str, Option<&str>); 40] = [
    (
        "The Matrix",
        1999,
        87,
        "A computer programmer discovers that reality as he knows it does not exist and finds himself engaged in a war between machines and humans.",
        Some("Welcome to the Real World"),
    ),
    (
        "The Matrix Reloaded",
        2003,
        72,
        "Neo and his allies race against time before the machines discover the city of Zion and destroy it.",
        Some("Free your mind"),
    ),
    (
        "The Matrix Revolutions",
        2003,
        68,
        "The human city of Zion defends itself against the massive invasion of the machines as Neo fights to end the war.",
        Some("Everything that has a beginning has an end"),
    ),
    (
        "The Devil's Advocate",
        1997,
        75,
        "A lawyer finds himself in a supernatural battle between good and evil when he joins a New York law firm.",
        Some("Evil has its winning ways"),
    ),
    (
        "A Few Good Men",
        1992,
        77,
        "Military lawyers uncover a conspiracy while defending two Marines accused of murder.",
        Some("In the heart of the nation's capital, in a courthouse of the U.S. government, one man will stop at nothing to keep his honor, and one will stop at nothing to find the truth."),
    ),
    (
        "Top Gun",
        1986,
        69,
        "As students at the United States Navy's elite fighter weapons school compete to be best in the class, one pilot learns a few things from a civilian instructor.",
        Some("I feel the need, the need for speed."),
    ),
    (
        "Jerry Maguire",
        2000,
        72,
        "A sports agent has a moral epiphany and is fired for expressing it. He decides to put his new philosophy to the test as an independent agent.",
        Some("The rest of his life begins now."),
    ),
    (
        "Stand By Me",
        1986,
        81,
        "After the death of one of his friends, a writer recounts a childhood journey with his friends to find the body of a missing boy.",
        Some("For some, it's the last real taste of innocence, and the first real taste of life. But for everyone, it's the time that memories are made of."),
    ),
    (
        "As Good as It Gets",
        1997,
        76,
        "A single mother and waitress, a misanthropic author, and a gay artist form an unlikely friendship.",
        Some("A comedy from the heart that goes for the throat."),
    ),
    (
        "What Dreams May Come",
        1998,
        70,
        "Chris Nielsen dies in an accident, and enters Heaven. But when he discovers that his beloved wife Annie has killed herself out of grief over the loss, he embarks on an afterlife adventure to reunite with her.",
        Some("After life there is more. The end is just the beginning."),
    ),
    (
        "Snow Falling on Cedars",
        1999,
        73,
        "A Japanese-American fisherman is accused of killing his neighbor at sea. For reporter Ishmael, the trial strikes a deep emotional chord.",
        Some("First loves last. Forever."),
    ),
    (
        "You've Got Mail",
        1998,
        66,
        "Two business rivals who despise each other in real life fall in love over the Internet.",
        Some("At odds in life... in love on-line."),
    ),
    (
        "Sleepless in Seattle",
        1993,
        68,
        "A recently widowed man's son calls a radio talk-show in an attempt to find his father a partner.",
        Some("What if someone you never met, someone you never saw, someone you never knew was the only someone for you?"),
    ),
    (
        "Joe Versus the Volcano",
        1990,
        58,
        "When a hypochondriac learns that he is dying, he accepts an offer to throw himself in a volcano at a tropical island.",
        Some("A story of love, lava and burning desire."),
    ),
    (
        "When Harry Met Sally",
        1998,
        76,
        "Harry and Sally have known each other for years, and are very good friends, but they fear sex would ruin the friendship.",
        Some("At odds in life... in love on-line."),
    ),
    (
        "That Thing You Do",
        1996,
        69,
        "A Pennsylvania band scores a one-hit wonder in 1964 and rides the fame until infighting, creative differences and personal struggles tear the band apart.",
        Some("In every life there comes a time when that thing you dream becomes that thing you do"),
    ),
    (
        "The Replacements",
        2000,
        76,
        "The coolest football movie ever. During a pro football strike, the owners hire substitute players.",
        Some("Pain heals, Chicks dig scars... Glory lasts forever"),
    ),
    (
        "RescueDawn",
        2006,
        73,
        "Based on the extraordinary true story of one man's fight for freedom in the jungles of Laos.",
        Some("Based on the extraordinary true story of one man's fight for freedom"),
    ),
    (
        "The Birdcage",
        1996,
        45,
        "Slapstick redeemed only by the Robin Williams and Gene Hackman's stellar performances.",
        Some("Come as you are"),
    ),
    (
        "Unforgiven",
        1992,
        85,
        "Dark, but compelling western about retired gunslinger William Munny who takes on one more job.",
        Some("It's a hell of a thing, killing a man"),
    ),
    (
        "Johnny Mnemonic",
        1995,
        56,
        "A data courier, literally carrying a data package inside his head, must deliver it before he dies from the burden.",
        Some("The hottest data on earth. In the coolest head in town"),
    ),
    (
        "Cloud Atlas",
        2012,
        95,
        "An amazing journey through time and space exploring how the actions and consequences of individual lives impact one another.",
        Some("Everything is connected"),
    ),
    (
        "The Da Vinci Code",
        2006,
        68,
        "A solid romp. Harvard professor Robert Langdon works with a cryptographer to solve a murder and uncover a religious mystery.",
        Some("Break The Codes"),
    ),
    (
        "V for Vendetta",
        2006,
        73,
        "In a future British tyranny, a shadowy freedom fighter plots to overthrow it with the help of a young woman.",
        Some("Freedom! Forever!"),
    ),
    (
        "Speed Racer",
        2008,
        60,
        "Young driver Speed Racer aspires to be champion of the racing world with the help of his family and his high-tech Mach 5 automobile.",
        Some("Speed has no limits"),
    ),
    (
        "Ninja Assassin",
        2009,
        63,
        "A young ninja turns his back on the orphanage that raised him, leading to a confrontation with a fellow ninja from the clan.",
        Some("Prepare to enter a secret world of assassins"),
    ),
    (
        "The Green Mile",
        1999,
        86,
        "The lives of guards on Death Row are affected by one of their charges: a black man accused of child murder and rape, yet who has a mysterious gift.",
        Some("Walk a mile you'll never forget."),
    ),
    (
        "Frost/Nixon",
        2008,
        76,
        "A dramatic retelling of the post-Watergate television interviews between British talk-show host David Frost and former president Richard Nixon.",
        Some("400 million people were waiting for the truth."),
    ),
    (
        "Hoffa",
        1992,
        65,
        "The story of the notorious American labor union leader Jimmy Hoffa, who organizes a bitter strike.",
        Some("He didn't want law. He wanted justice."),
    ),
    (
        "Apollo 13",
        1995,
        77,
        "NASA must devise a strategy to return Apollo 13 to Earth safely after the spacecraft undergoes massive internal damage.",
        Some("Houston, we have a problem."),
    ),
    (
        "Twister",
        1996,
        64,
        "Two storm chasers on the brink of divorce must work together to create an advanced weather alert system by putting themselves in the cross-hairs of extremely violent tornadoes.",
        Some("Don't Breathe. Don't Look Back."),
    ),
    (
        "Cast Away",
        2000,
        78,
        "A FedEx executive undergoes a physical and emotional transformation after crash landing on a deserted island.",
        Some("At the edge of the world, his journey begins."),
    ),
    (
        "One Flew Over the Cuckoo's Nest",
        1975,
        84,
        "A criminal pleads insanity and is admitted to a mental institution, where he rebels against the oppressive nurse and rallies up the scared patients.",
        Some("If he's crazy, what does that make you?"),
    ),
    (
        "Something's Gotta Give",
        2003,
        67,
        "A swinger on the cusp of being a senior citizen with a history of bedding young women falls in love with an accomplished woman closer to his age.",
        None,
    ),
    (
        "Bicentennial Man",
        1999,
        69,
        "An android endeavors to become human as he gradually acquires emotions.",
        Some("One robot's 200 year journey to become an ordinary man."),
    ),
    (
        "Charlie Wilson's War",
        2007,
        70,
        "A drama based on a Texas congressman Charlie Wilson's covert dealings in Afghanistan, where his efforts to assist rebels in their war with the Soviets have some unforeseen and long-reaching effects.",
        Some("A stiff drink. A little mascara. A lot of nerve. Who said they couldn't bring down the Soviet empire."),
    ),
    (
        "The Polar Express",
        2004,
        57,
        "On Christmas Eve, a young boy embarks on a magical adventure to the North Pole on the Polar Express.",
        Some("This Holiday Season… Believe"),
    ),
    (
        "A League of Their Own",
        1992,
        73,
        "Two sisters join the first female professional baseball league and struggle to help it succeed amidst their own growing rivalry.",
        Some("Once in a lifetime you get a chance to do something different."),
    ),
    (
        "Parasite",
        2019,
        85,
        "A poor family schemes to become employed by a wealthy family and infiltrate their household by posing as unrelated, highly qualified individuals.",
        Some("Act like you own the place"),
    ),
    (
        "Joker",
        2019,
        84,
        "In Gotham City, mentally troubled comedian Arthur Fleck is disregarded and mistreated by society. He then embarks on a downward spiral of revolution and bloody crime.",
        Some("Put on a happy face"),
    ),
];

/// (name, birth year)
const PEOPLE: [(&str, Option<i32>); 139] = [
    ("Keanu Reeves", Some(1964)),
    ("Carrie-Anne Moss", Some(1967)),
    ("Laurence Fishburne", Some(1961)),
    ("Hugo Weaving", Some(1960)),
    ("Andy Wachowski", Some(1967)),
    ("Lana Wachowski", Some(1965)),
    ("Joel Silver", Some(1952)),
    ("Emil Eifrem", Some(1978)),
    ("Charlize Theron", Some(1975)),
    ("Al Pacino", Some(1940)),
    ("Taylor Hackford", Some(1944)),
    ("Tom Cruise", Some(1962)),
    ("Jack Nicholson", Some(1937)),
    ("Demi Moore", Some(1962)),
    ("Kevin Bacon", Some(1958)),
    ("Kiefer Sutherland", Some(1966)),
    ("Noah Wyle", Some(1971)),
    ("Cuba Gooding Jr.", Some(1968)),
    ("Kevin Pollak", Some(1957)),
    ("J.T. Walsh", Some(1943)),
    ("James Marshall", Some(1967)),
    ("Christopher Guest", Some(1948)),
    ("Rob Reiner", Some(1947)),
    ("Aaron Sorkin", Some(1961)),
    ("Kelly McGillis", Some(1957)),
    ("Val Kilmer", Some(1959)),
    ("Anthony Edwards", Some(1962)),
    ("Tom Skerritt", Some(1933)),
    ("Meg Ryan", Some(1961)),
    ("Tony Scott", Some(1944)),
    ("Jim Cash", Some(1941)),
    ("Renee Zellweger", Some(1969)),
    ("Kelly Preston", Some(1962)),
    ("Jerry O'Connell", Some(1974)),
    ("Jay Mohr", Some(1970)),
    ("Bonnie Hunt", Some(1961)),
    ("Regina King", Some(1971)),
    ("Jonathan Lipnicki", Some(1996)),
    ("Cameron Crowe", Some(1957)),
    ("River Phoenix", Some(1970)),
    ("Corey Feldman", Some(1971)),
    ("Wil Wheaton", Some(1972)),
    ("John Cusack", Some(1966)),
    ("Marshall Bell", Some(1942)),
    ("Helen Hunt", Some(1963)),
    ("Greg Kinnear", Some(1963)),
    ("James L. Brooks", Some(1940)),
    ("Annabella Sciorra", Some(1960)),
    ("Max von Sydow", Some(1929)),
    ("Werner Herzog", Some(1942)),
    ("Robin Williams", Some(1951)),
    ("Vincent Ward", Some(1956)),
    ("Ethan Hawke", Some(1970)),
    ("Rick Yune", Some(1971)),
    ("James Cromwell", Some(1940)),
    ("Scott Hicks", Some(1953)),
    ("Parker Posey", Some(1968)),
    ("Dave Chappelle", Some(1973)),
    ("Steve Zahn", Some(1967)),
    ("Tom Hanks", Some(1956)),
    ("Nora Ephron", Some(1941)),
    ("Rita Wilson", Some(1956)),
    ("Bill Pullman", Some(1953)),
    ("Victor Garber", Some(1949)),
    ("Rosie O'Donnell", Some(1962)),
    ("John Patrick Stanley", Some(1950)),
    ("Nathan Lane", Some(1956)),
    ("Billy Crystal", Some(1948)),
    ("Carrie Fisher", Some(1956)),
    ("Bruno Kirby", Some(1949)),
    ("Liv Tyler", Some(1977)),
    ("Brooke Langton", Some(1970)),
    ("Gene Hackman", Some(1930)),
    ("Orlando Jones", Some(1968)),
    ("Howard Deutch", Some(1950)),
    ("Christian Bale", Some(1974)),
    ("Zach Grenier", Some(1954)),
    ("Mike Nichols", Some(1931)),
    ("Richard Harris", Some(1930)),
    ("Clint Eastwood", Some(1930)),
    ("Takeshi Kitano", Some(1947)),
    ("Dina Meyer", Some(1968)),
    ("Ice-T", Some(1958)),
    ("Robert Longo", Some(1953)),
    ("Halle Berry", Some(1966)),
    ("Jim Broadbent", Some(1949)),
    ("Tom Tykwer", Some(1965)),
    ("Ian McKellen", Some(1939)),
    ("Audrey Tautou", Some(1976)),
    ("Paul Bettany", Some(1971)),
    ("Ron Howard", Some(1954)),
    ("Natalie Portman", Some(1981)),
    ("Stephen Rea", Some(1946)),
    ("John Hurt", Some(1940)),
    ("Ben Miles", Some(1967)),
    ("Emile Hirsch", Some(1985)),
    ("John Goodman", Some(1960)),
    ("Susan Sarandon", Some(1946)),
    ("Matthew Fox", Some(1966)),
    ("Christina Ricci", Some(1980)),
    ("Rain", Some(1982)),
    ("Naomie Harris", None),
    ("Michael Clarke Duncan", Some(1957)),
    ("David Morse", Some(1953)),
    ("Sam Rockwell", Some(1968)),
    ("Gary Sinise", Some(1955)),
    ("Patricia Clarkson", Some(1959)),
    ("Frank Darabont", Some(1959)),
    ("Frank Langella", Some(1938)),
    ("Michael Sheen", Some(1969)),
    ("Oliver Platt", Some(1960)),
    ("Danny DeVito", Some(1944)),
    ("John C. Reilly", Some(1965)),
    ("Ed Harris", Some(1950)),
    ("Bill Paxton", Some(1955)),
    ("Philip Seymour Hoffman", Some(1967)),
    ("Jan de Bont", Some(1943)),
    ("Robert Zemeckis", Some(1951)),
    ("Milos Forman", Some(1932)),
    ("Diane Keaton", Some(1946)),
    ("Nancy Meyers", Some(1949)),
    ("Chris Columbus", Some(1958)),
    ("Julia Roberts", Some(1967)),
    ("Madonna", Some(1954)),
    ("Geena Davis", Some(1956)),
    ("Lori Petty", Some(1963)),
    ("Penny Marshall", Some(1943)),
    ("Paul Blythe", None),
    ("Angela Scope", None),
    ("Jessica Thompson", None),
    ("James Thompson", None),
    ("Kang-ho Song", None),
    ("Sun-kyun Lee", None),
    ("Yeo-jeong Jo", None),
    ("Woo-sik Choi", None),
    ("So-dam Park", None),
    ("Joaquin Phoenix", None),
    ("Robert De Niro", None),
    ("Zazie Beetz", None),
];
