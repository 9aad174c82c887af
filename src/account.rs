use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MAX_NICKNAME_CHARS: usize = 20;
const MAX_DESCRIPTION_CHARS: usize = 200;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Carla", "Derek", "Elena", "Felix", "Greta", "Hugo",
    "Irene", "Jonas", "Karin", "Lukas", "Marta", "Niels", "Olga", "Pavel",
    "Rita", "Simon", "Tessa", "Viktor",
];

const LAST_NAMES: &[&str] = &[
    "Adler", "Barnes", "Castillo", "Dvorak", "Eriksen", "Fischer", "Guzman",
    "Hoffman", "Ivanov", "Jensen", "Kowalski", "Lindqvist", "Moreau",
    "Novak", "Ortiz", "Petrov", "Reyes", "Sato", "Thorne", "Weber",
];

const SENTENCES: &[&str] = &[
    "Plays ranked lobbies most evenings and never backs down from a rematch.",
    "Collects obscure strategy guides and quotes them at the worst moments.",
    "Joined on a friend's recommendation and stayed for the leaderboards.",
    "Prefers support roles but will carry when the lobby demands it.",
    "Streams occasionally, mostly losses, narrated with great enthusiasm.",
    "Here to climb the points table one narrow win at a time.",
];

const SEXES: [&str; 2] = ["female", "male"];

/// Request body for `user/create`.
#[derive(Clone, Debug, Serialize)]
pub struct SyntheticProfile {
    pub nickname: String,
    pub email: String,
    pub password: String,
    pub sex: String,
    pub description: String,
}

/// One persisted batch entry: the profile fields plus the bearer credential
/// obtained at login.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    pub nickname: String,
    pub email: String,
    pub password: String,
    pub sex: String,
    pub description: String,
    pub token: String,
}

impl Account {
    pub fn from_profile(profile: SyntheticProfile, token: String) -> Self {
        Self {
            nickname: profile.nickname,
            email: profile.email,
            password: profile.password,
            sex: profile.sex,
            description: profile.description,
            token,
        }
    }
}

/// Synthesize one registration payload. Uniqueness of email and nickname is
/// attempted via random digit prefixes, not guaranteed.
pub fn synthesize(rng: &mut impl Rng) -> SyntheticProfile {
    let name = full_name(rng);
    let nickname = truncate_chars(
        &format!("{}{}", random_digits(rng, 4), name),
        MAX_NICKNAME_CHARS,
    );
    let email = format!(
        "{}{}@gmail.com",
        full_name(rng).replace(' ', ""),
        random_digits(rng, 4)
    );
    let password = full_name(rng);
    let sex = SEXES[rng.random_range(0..SEXES.len())].to_string();
    let description = synth_description(rng);

    SyntheticProfile {
        nickname,
        email,
        password,
        sex,
        description,
    }
}

fn full_name(rng: &mut impl Rng) -> String {
    format!(
        "{} {}",
        FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())],
        LAST_NAMES[rng.random_range(0..LAST_NAMES.len())]
    )
}

fn random_digits(rng: &mut impl Rng, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

// Free text with line breaks, flattened to spaces and cut to a random
// length between 1 and 200 characters.
fn synth_description(rng: &mut impl Rng) -> String {
    let mut text = String::new();
    for _ in 0..rng.random_range(1..=3) {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(SENTENCES[rng.random_range(0..SENTENCES.len())]);
    }
    let flattened = text.replace('\n', " ");
    truncate_chars(&flattened, rng.random_range(1..=MAX_DESCRIPTION_CHARS))
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn profiles_satisfy_field_constraints() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let profile = synthesize(&mut rng);
            assert!(!profile.nickname.is_empty());
            assert!(profile.nickname.chars().count() <= MAX_NICKNAME_CHARS);
            assert!(profile.email.ends_with("@gmail.com"));
            assert!(!profile.email.contains(' '));
            assert!(!profile.password.is_empty());
            assert!(profile.sex == "female" || profile.sex == "male");
            let len = profile.description.chars().count();
            assert!(len >= 1 && len <= MAX_DESCRIPTION_CHARS);
            assert!(!profile.description.contains('\n'));
        }
    }

    #[test]
    fn same_seed_yields_same_profile() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let pa = synthesize(&mut a);
        let pb = synthesize(&mut b);
        assert_eq!(pa.nickname, pb.nickname);
        assert_eq!(pa.email, pb.email);
        assert_eq!(pa.password, pb.password);
        assert_eq!(pa.description, pb.description);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("ab", 20), "ab");
    }
}
