use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

const COLORS: [&str; 4] = ["green", "brown", "blue", "hazel"];

type TestPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>, StdRng>;

fn prompter(script: &str) -> TestPrompter {
    prompter_with_seed(script, 7)
}

fn prompter_with_seed(script: &str, seed: u64) -> TestPrompter {
    Prompter::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        StdRng::seed_from_u64(seed),
    )
}

fn transcript(prompter: TestPrompter) -> String {
    let (_, output, _) = prompter.into_parts();
    String::from_utf8(output).expect("prompt output is UTF-8")
}

#[test]
fn choose_returns_the_numbered_option() {
    for (index, expected) in COLORS.iter().enumerate() {
        let mut prompter = prompter(&format!("{}\n", index + 1));
        let choice = prompter
            .choose("Eye color:", &COLORS, None)
            .expect("valid choice");
        assert_eq!(choice, *expected);
    }
}

#[test]
fn choose_lists_options_from_one() {
    let mut prompter = prompter("1\n");
    prompter
        .choose("Eye color:", &COLORS, None)
        .expect("valid choice");

    let output = transcript(prompter);
    assert!(output.starts_with("Eye color:\n  1) green\n  2) brown\n"));
    assert!(output.contains("  4) hazel"));
}

#[test]
fn empty_answer_uses_default_index() {
    for seed in 0..20 {
        let mut prompter = prompter_with_seed("\n", seed);
        let choice = prompter
            .choose("Preset:", &COLORS, Some(3))
            .expect("default choice");
        assert_eq!(choice, "hazel");
    }
}

#[test]
fn empty_answer_without_default_picks_an_option() {
    for seed in 0..20 {
        let mut prompter = prompter_with_seed("\n", seed);
        let choice = prompter
            .choose("Eye color:", &COLORS, None)
            .expect("random choice");
        assert!(COLORS.contains(&choice.as_str()));
    }
}

#[test]
fn out_of_range_default_falls_back_to_random() {
    let mut prompter = prompter("\n");
    let choice = prompter
        .choose("Eye color:", &COLORS, Some(10))
        .expect("random choice");
    assert!(COLORS.contains(&choice.as_str()));
}

#[test]
fn invalid_choice_reprompts() {
    let mut prompter = prompter("0\nabc\n5\n2\n");
    let choice = prompter
        .choose("Eye color:", &COLORS, None)
        .expect("eventually valid");
    assert_eq!(choice, "brown");

    let output = transcript(prompter);
    assert_eq!(
        output
            .matches("Invalid choice. Please enter a valid number.")
            .count(),
        3
    );
}

#[test]
fn choose_many_deduplicates_in_listed_order() {
    let mut prompter = prompter("3, 1,3,1\n");
    let choices = prompter
        .choose_many("Face details:", &COLORS, false)
        .expect("valid selection");
    assert_eq!(choices, vec!["blue", "green"]);
}

#[test]
fn choose_many_rejects_any_bad_part() {
    let mut prompter = prompter("1,9\n2,x\n4\n");
    let choices = prompter
        .choose_many("Face details:", &COLORS, false)
        .expect("eventually valid");
    assert_eq!(choices, vec!["hazel"]);

    let output = transcript(prompter);
    assert_eq!(
        output
            .matches("Invalid selection. Please choose valid numbers.")
            .count(),
        2
    );
}

#[test]
fn choose_many_rejects_separators_only() {
    let mut prompter = prompter(", ,\n2\n");
    let choices = prompter
        .choose_many("Face details:", &COLORS, false)
        .expect("eventually valid");
    assert_eq!(choices, vec!["brown"]);
    assert!(transcript(prompter).contains("Invalid input. Try again."));
}

#[test]
fn empty_multi_answer_samples_one_or_two_distinct_options() {
    for seed in 0..50 {
        let mut prompter = prompter_with_seed("\n", seed);
        let choices = prompter
            .choose_many("Face details:", &COLORS, false)
            .expect("random selection");

        assert!((1..=2).contains(&choices.len()));
        assert!(choices.iter().all(|choice| COLORS.contains(&choice.as_str())));
        assert_eq!(dedup_preserving_order(choices.clone()), choices);
    }
}

#[test]
fn empty_multi_answer_can_resolve_to_none_sentinel() {
    let accessories = ["none", "rings", "watch", "sunglasses"];
    let mut saw_none = false;

    for seed in 0..100 {
        let mut prompter = prompter_with_seed("\n", seed);
        let choices = prompter
            .choose_many("Accessories:", &accessories, true)
            .expect("random selection");
        if choices == vec![NONE_OPTION.to_string()] {
            saw_none = true;
        }
        assert!((1..=2).contains(&choices.len()));
    }

    assert!(saw_none);
}

#[test]
fn none_option_without_allow_none_comes_only_from_plain_sampling() {
    let face_details = ["none", "dimples", "freckles", "beauty mark"];
    let mut lone_none_without = 0;
    let mut lone_none_with = 0;

    for seed in 0..400 {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = rng.gen_range(1..=2);
        let sampled: Vec<String> = face_details
            .choose_multiple(&mut rng, count)
            .map(|option| option.to_string())
            .collect();

        let choices = prompter_with_seed("\n", seed)
            .choose_many("Face details:", &face_details, false)
            .expect("random selection");
        assert_eq!(choices, sampled);

        if choices == vec![NONE_OPTION.to_string()] {
            lone_none_without += 1;
        }
        let allowed = prompter_with_seed("\n", seed)
            .choose_many("Face details:", &face_details, true)
            .expect("random selection");
        if allowed == vec![NONE_OPTION.to_string()] {
            lone_none_with += 1;
        }
    }

    assert!(lone_none_without < lone_none_with);
}

#[test]
fn single_option_multi_menu_returns_that_option() {
    let mut prompter = prompter("\n");
    let choices = prompter
        .choose_many("Only:", &["dimples"], false)
        .expect("random selection");
    assert_eq!(choices, vec!["dimples"]);
}

#[test]
fn confirm_accepts_yes_and_no_in_any_case() {
    let mut prompter = prompter("Y\n no \nYES\nN\n");
    assert!(prompter.confirm("Hair visible? ", true).expect("answer"));
    assert!(!prompter.confirm("Hair visible? ", true).expect("answer"));
    assert!(prompter.confirm("Hair visible? ", true).expect("answer"));
    assert!(!prompter.confirm("Hair visible? ", true).expect("answer"));
}

#[test]
fn confirm_reprompts_on_unknown_answer() {
    let mut prompter = prompter("maybe\nn\n");
    assert!(!prompter.confirm("Hair visible? ", true).expect("answer"));
    assert!(transcript(prompter).contains("Please enter y or n (or ENTER for default)."));
}

#[test]
fn confirm_without_random_default_is_true() {
    for seed in 0..20 {
        let mut prompter = prompter_with_seed("\n", seed);
        assert!(prompter.confirm("Again? ", false).expect("answer"));
    }
}

#[test]
fn enforce_adult_age_keeps_in_band_values() {
    for age in MIN_AGE..=MAX_AGE {
        assert_eq!(enforce_adult_age(&age.to_string()), (age, None));
    }
}

#[test]
fn enforce_adult_age_falls_back_to_25() {
    assert_eq!(
        enforce_adult_age("20"),
        (FALLBACK_AGE, Some(AgeWarning::TooYoung))
    );
    assert_eq!(
        enforce_adult_age("31"),
        (FALLBACK_AGE, Some(AgeWarning::TooOld))
    );
    assert_eq!(
        enforce_adult_age("twenty"),
        (FALLBACK_AGE, Some(AgeWarning::NotANumber))
    );
    assert_eq!(
        enforce_adult_age("-22"),
        (FALLBACK_AGE, Some(AgeWarning::NotANumber))
    );
    assert_eq!(
        enforce_adult_age("99999999999999999999999"),
        (FALLBACK_AGE, Some(AgeWarning::TooOld))
    );
}

#[test]
fn age_prompt_prints_fallback_warning() {
    let mut prompter = prompter("17\n");
    assert_eq!(prompter.age("Age: ").expect("age"), FALLBACK_AGE);
    assert!(transcript(prompter).contains("Age under 21 is not allowed. Using 25."));
}

#[test]
fn empty_age_is_random_within_band() {
    for seed in 0..30 {
        let mut prompter = prompter_with_seed("\n", seed);
        let age = prompter.age("Age: ").expect("age");
        assert!((MIN_AGE..=MAX_AGE).contains(&age));
        assert!(!transcript(prompter).contains("Using 25."));
    }
}

#[test]
fn text_or_uses_default_for_blank_input() {
    let mut prompter = prompter("   \ncustom subject\n");
    assert_eq!(prompter.text_or("Subject: ", "fallback").expect("text"), "fallback");
    assert_eq!(
        prompter.text_or("Subject: ", "fallback").expect("text"),
        "custom subject"
    );
}

#[test]
fn closed_input_is_reported() {
    let mut prompter = prompter("");
    let error = prompter
        .choose("Eye color:", &COLORS, None)
        .expect_err("no input left");
    assert!(matches!(error, InputError::Closed));
}

#[test]
fn parse_menu_index_rejects_signs_and_zero() {
    assert_eq!(parse_menu_index("+1", 3), None);
    assert_eq!(parse_menu_index("0", 3), None);
    assert_eq!(parse_menu_index("3", 3), Some(2));
    assert_eq!(parse_menu_index(" 1 ", 3), Some(0));
}
