use super::*;
use std::io::Cursor;

fn session(input: &str) -> (Result<(), InputError>, String) {
    let mut term = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let result = run(&mut term, &NumberFormat::default());
    (result, String::from_utf8(term.into_writer()).unwrap())
}

#[test]
fn test_exit_immediately() {
    let (result, out) = session("5\n");
    assert!(result.is_ok());
    assert!(out.contains("=========== Scientific Calculator ==========="));
    assert!(out.contains("\t4. Unit Conversion (Length, Temperature, Weight)"));
    assert!(out.ends_with("Thank you for using. Goodbye!\n"));
}

#[test]
fn test_menu_reprompts_out_of_range() {
    let (result, out) = session("0\n6\nfive\n-1\n5\n");
    assert!(result.is_ok());
    assert_eq!(
        out.matches("Invalid input! Please select a number between 1-5.")
            .count(),
        3
    );
    assert!(!out.contains("Invalid selection!"));
    assert_eq!(out.matches("Invalid input! Please enter an integer.").count(), 1);
    // The menu is printed once; only the selection prompt repeats
    assert_eq!(out.matches("Scientific Calculator").count(), 1);
}

#[test]
fn test_back_prompt_requires_single_b() {
    let (result, out) = session("1\n6\n2\n/\n\nback\nbb\nB\n5\n");
    assert!(result.is_ok());
    assert!(out.contains("Result: 6.000000 / 2.000000 = 3.000000"));
    assert_eq!(out.matches("Enter 'b' or 'B' to return to main menu: ").count(), 4);
    assert_eq!(out.matches("Scientific Calculator").count(), 2);
}

#[test]
fn test_full_tour() {
    let input = [
        "1", "5", "2", "%", "b", // arithmetic
        "2", "1", "1", "90", "b", // trigonometry
        "3", "3", "8", "2", "b", // logarithm
        "4", "2", "0", "1", "2", "b", // conversion
        "5",
    ]
    .join("\n")
        + "\n";
    let (result, out) = session(&input);
    assert!(result.is_ok());
    assert!(out.contains("Result: 5.000000 % 2.000000 = 1.000000"));
    assert!(out.contains("Result: sin(90.000000 °) = 1.000000"));
    assert!(out.contains("Result: log_2.000000(8.000000) = 3.000000"));
    assert!(out.contains("Result: 0.000000 Celsius(°C) = 32.000000 Fahrenheit(°F)"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_closed_stream_at_back_prompt() {
    let (result, _) = session("1\n1\n1\n+\n");
    assert!(matches!(result, Err(InputError::Closed)));
}

#[test]
fn test_closed_stream_at_menu() {
    let (result, _) = session("");
    assert!(matches!(result, Err(InputError::Closed)));
}
