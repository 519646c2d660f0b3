use std::io::Write;
use std::time::Duration;

use tracing::info;

use crate::core::java::RuntimeName;

use super::PromptInput;

/// What the user picked from the runtime menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    /// Option 1: keep whatever was detected.
    Detected,
    Runtime(RuntimeName),
}

/// Shows the runtime menu until a valid option is entered.
///
/// A timed-out or closed input counts as option 1.
pub async fn ask_for_runtime<I, W>(
    detected: RuntimeName,
    timeout: Duration,
    input: &mut I,
    out: &mut W,
) -> std::io::Result<PromptChoice>
where
    I: PromptInput + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "Detected initial boot with this jar.")?;
    writeln!(out, "Which java version do you want to use?")?;

    loop {
        write_options(detected, timeout, out)?;
        out.flush()?;

        let answer = match input.read_line(timeout).await {
            Some(answer) => answer,
            None => {
                info!("Prompt expired, keeping detected {}", detected);
                "1".to_string()
            }
        };

        let answer = normalize_answer(&answer);
        if let Some(choice) = parse_choice(answer) {
            return Ok(choice);
        }

        writeln!(
            out,
            "Invalid option '{}' - the only valid options are the following:",
            answer
        )?;
    }
}

fn write_options<W: Write + ?Sized>(
    detected: RuntimeName,
    timeout: Duration,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "1) Automatically detected version: '{}'", detected)?;
    for (index, name) in RuntimeName::ALL.iter().enumerate() {
        writeln!(out, "{}) {}", index + 2, name)?;
    }
    writeln!(
        out,
        "NOTE: this prompt will automatically expire in {} seconds from inactivity and default to option 1) if nothing is chosen.",
        timeout.as_secs()
    )
}

/// Trims the answer and drops one trailing `)`, so `3)` reads as `3`.
pub fn normalize_answer(answer: &str) -> &str {
    let answer = answer.trim();
    answer.strip_suffix(')').unwrap_or(answer)
}

/// Parses a normalized menu answer.
pub fn parse_choice(answer: &str) -> Option<PromptChoice> {
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match answer.parse::<usize>().ok()? {
        1 => Some(PromptChoice::Detected),
        n => RuntimeName::ALL
            .get(n.checked_sub(2)?)
            .copied()
            .map(PromptChoice::Runtime),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::ScriptedInput;

    const TIMEOUT: Duration = Duration::from_secs(30);

    #[test]
    fn parses_numbered_options() {
        assert_eq!(parse_choice("1"), Some(PromptChoice::Detected));
        assert_eq!(
            parse_choice("2"),
            Some(PromptChoice::Runtime(RuntimeName::Java8))
        );
        assert_eq!(
            parse_choice("3"),
            Some(PromptChoice::Runtime(RuntimeName::Java11))
        );
        assert_eq!(
            parse_choice(normalize_answer("4)")),
            Some(PromptChoice::Runtime(RuntimeName::Java16))
        );
        assert_eq!(
            parse_choice(normalize_answer(" 5 ")),
            Some(PromptChoice::Runtime(RuntimeName::Java17))
        );
    }

    #[test]
    fn rejects_invalid_answers() {
        for answer in ["0", "6", "", ")", "-1", "+2", "two", "1))", "Java 8"] {
            assert_eq!(parse_choice(normalize_answer(answer)), None, "{answer:?}");
        }
    }

    #[tokio::test]
    async fn reprompts_until_valid() {
        let mut input = ScriptedInput::new([Some("9"), Some("abc"), Some("2)")]);
        let mut out = Vec::new();

        let choice = ask_for_runtime(RuntimeName::Java17, TIMEOUT, &mut input, &mut out)
            .await
            .unwrap();
        assert_eq!(choice, PromptChoice::Runtime(RuntimeName::Java8));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Which java version").count(), 1);
        assert!(text.contains("Invalid option '9' - the only valid options are the following:"));
        assert!(text.contains("Invalid option 'abc'"));
        assert_eq!(
            text.matches("1) Automatically detected version: 'Java 17'").count(),
            3
        );
    }

    #[test]
    fn normalize_strips_one_parenthesis() {
        assert_eq!(normalize_answer(" 9) "), "9");
        assert_eq!(normalize_answer("1))"), "1)");
        assert_eq!(normalize_answer("abc"), "abc");
    }

    #[tokio::test]
    async fn invalid_answer_is_echoed_without_parenthesis() {
        let mut input = ScriptedInput::new([Some("9)"), Some("1)")]);
        let mut out = Vec::new();

        let choice = ask_for_runtime(RuntimeName::Java11, TIMEOUT, &mut input, &mut out)
            .await
            .unwrap();
        assert_eq!(choice, PromptChoice::Detected);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid option '9' - the only valid options are the following:"));
        assert!(!text.contains("'9)'"));
    }

    #[tokio::test]
    async fn timeout_selects_detected() {
        let mut input = ScriptedInput::new([None::<&str>]);
        let mut out = Vec::new();

        let choice = ask_for_runtime(RuntimeName::Java8, TIMEOUT, &mut input, &mut out)
            .await
            .unwrap();
        assert_eq!(choice, PromptChoice::Detected);
    }

    #[tokio::test]
    async fn lists_every_runtime() {
        let mut input = ScriptedInput::new([Some("1")]);
        let mut out = Vec::new();
        ask_for_runtime(RuntimeName::Java11, TIMEOUT, &mut input, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = "Detected initial boot with this jar.\n\
            Which java version do you want to use?\n\
            1) Automatically detected version: 'Java 11'\n\
            2) Java 8\n\
            3) Java 11\n\
            4) Java 16\n\
            5) Java 17\n\
            NOTE: this prompt will automatically expire in 30 seconds from inactivity and default to option 1) if nothing is chosen.\n";
        assert_eq!(text, expected);
    }
}
