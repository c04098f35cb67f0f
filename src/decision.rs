//! Uniform random picks over caller options or a fixed response pool.

use rand::{seq::SliceRandom, Rng};

/// What `choose` answers when there's nothing to choose from.
pub const NO_OPTIONS: &str = "IDK... you didn't give me any options!";

pub const COIN_SIDES: [&str; 2] = ["Heads", "Tails"];

pub const YES_NO_ANSWERS: [&str; 2] = ["Yes", "No"];

/// "Don't count on it" shows up twice, so it's drawn twice as often as the rest.
pub const EIGHT_BALL_RESPONSES: [&str; 20] = [
    "It is certain",
    "Reply hazy, try again",
    "Don't count on it",
    "It is decidedly so",
    "My sources say no",
    "Yes definitely",
    "Better not tell you now",
    "Outlook not so good",
    "You may rely on it",
    "Concentrate and ask again",
    "Very doubtful",
    "As I see it, yes",
    "My reply is no",
    "Without a doubt",
    "Cannot predict now",
    "Most likely",
    "Ask again later",
    "Signs point to yes",
    "Outlook good",
    "Don't count on it",
];

/// Picks one of `options`, each index equally likely.
///
/// An empty list isn't an error, it answers with [`NO_OPTIONS`].
pub fn choose<S: AsRef<str>>(options: &[S]) -> &str {
    choose_with(&mut rand::thread_rng(), options)
}

pub fn choose_with<'a, S, R>(rng: &mut R, options: &'a [S]) -> &'a str
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    options.choose(rng).map_or(NO_OPTIONS, |option| option.as_ref())
}

pub fn flip_coin() -> &'static str {
    flip_coin_with(&mut rand::thread_rng())
}

pub fn flip_coin_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_from_pool(rng, &COIN_SIDES)
}

pub fn yes_or_no() -> &'static str {
    yes_or_no_with(&mut rand::thread_rng())
}

pub fn yes_or_no_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_from_pool(rng, &YES_NO_ANSWERS)
}

pub fn eight_ball() -> &'static str {
    eight_ball_with(&mut rand::thread_rng())
}

pub fn eight_ball_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_from_pool(rng, &EIGHT_BALL_RESPONSES)
}

fn pick_from_pool<R: Rng + ?Sized, const N: usize>(rng: &mut R, pool: &[&'static str; N]) -> &'static str {
    const { assert!(N > 0, "response pools can't be empty") };
    pool[rng.gen_range(0..N)]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    use super::*;

    const TRIALS: usize = 500;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0x1d_c0ffee)
    }

    #[test]
    fn choose_from_empty_list_gives_the_sentinel() {
        let empty: [&str; 0] = [];
        assert_eq!(choose(&empty), NO_OPTIONS);
        assert_eq!(choose(Vec::<String>::new().as_slice()), NO_OPTIONS);
    }

    #[rstest]
    #[case::single(&["only"])]
    #[case::pair(&["pizza", "sushi"])]
    #[case::with_spaces(&["take the bus", "walk", "stay home"])]
    #[case::duplicates(&["a", "a", "b"])]
    fn choose_always_returns_one_of_the_options(#[case] options: &[&str]) {
        for _ in 0..TRIALS {
            assert!(options.contains(&choose(options)));
        }
    }

    #[test]
    fn choose_works_on_owned_strings() {
        let options = vec![String::from("red"), String::from("green"), String::from("blue")];
        let picked = choose(options.as_slice());
        assert!(options.iter().any(|option| option == picked));
    }

    #[test]
    fn choose_eventually_varies() {
        let options = ["a", "b", "c", "d", "e"];
        let mut rng = seeded();

        let picked: HashSet<_> = (0..10).map(|_| choose_with(&mut rng, &options)).collect();
        assert!(picked.len() > 1, "expected some variation, got {picked:?}");

        let picked: HashSet<_> = (0..TRIALS).map(|_| choose_with(&mut rng, &options)).collect();
        assert_eq!(picked.len(), options.len());
    }

    #[test]
    fn coin_flip_lands_on_both_sides() {
        let mut rng = seeded();
        let sides: HashSet<_> = (0..TRIALS).map(|_| flip_coin_with(&mut rng)).collect();
        assert_eq!(sides, HashSet::from(COIN_SIDES));
        assert!(COIN_SIDES.contains(&flip_coin()));
    }

    #[test]
    fn yes_or_no_gives_both_answers() {
        let mut rng = seeded();
        let answers: HashSet<_> = (0..TRIALS).map(|_| yes_or_no_with(&mut rng)).collect();
        assert_eq!(answers, HashSet::from(YES_NO_ANSWERS));
        assert!(YES_NO_ANSWERS.contains(&yes_or_no()));
    }

    #[test]
    fn eight_ball_answers_from_its_pool() {
        let mut rng = seeded();
        for _ in 0..TRIALS {
            let response = eight_ball_with(&mut rng);
            assert!(!response.is_empty());
            assert!(EIGHT_BALL_RESPONSES.contains(&response));
        }
        assert!(EIGHT_BALL_RESPONSES.contains(&eight_ball()));
    }

    #[test]
    fn pool_of_one_always_answers_it() {
        let mut rng = seeded();
        for _ in 0..TRIALS {
            assert_eq!(pick_from_pool(&mut rng, &["only"]), "only");
        }
    }

    #[test]
    fn pool_picks_never_fall_back_to_the_sentinel() {
        let mut rng = seeded();
        for _ in 0..TRIALS {
            assert_ne!(flip_coin_with(&mut rng), NO_OPTIONS);
            assert_ne!(yes_or_no_with(&mut rng), NO_OPTIONS);
            assert_ne!(eight_ball_with(&mut rng), NO_OPTIONS);
        }
    }

    #[test]
    fn eight_ball_keeps_the_doubled_response() {
        let doubled = EIGHT_BALL_RESPONSES
            .iter()
            .filter(|response| **response == "Don't count on it")
            .count();
        assert_eq!(doubled, 2);

        let distinct: HashSet<_> = EIGHT_BALL_RESPONSES.iter().collect();
        assert_eq!(distinct.len(), 19);
    }
}
