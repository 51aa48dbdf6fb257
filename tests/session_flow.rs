// End-to-end conversation against a real file on disk

use address_book::session::PROMPT;
use address_book::{storage, Exit, Phone, Session};
use std::io::Cursor;

fn converse(session: &mut Session, script: &str) -> (Exit, Vec<String>) {
    let mut out = Vec::new();
    let exit = session.run(Cursor::new(script), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let replies = text
        .split(PROMPT)
        .skip(1)
        .map(|chunk| chunk.trim_end().to_string())
        .collect();
    (exit, replies)
}

#[test]
fn test_full_conversation_persists_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    let mut first = Session::with_book(storage::load(&path), path.clone());
    let script = "\
hello
add John 1234567890
add John 5555555555
add Jane 123
change John 1234567890 1112223333
phone John
add-birthday Jane 15.06.1985
show-birthday Jane
dance
exit
";
    let (exit, replies) = converse(&mut first, script);

    assert_eq!(exit, Exit::Command);
    assert_eq!(
        replies,
        vec![
            "How can I help you?",
            "Contact added.",
            "Contact updated.",
            "Phone must contain 10 digits.",
            "Contact updated.",
            "1112223333; 5555555555",
            "Birthday added.",
            "15.06.1985",
            "Invalid command.",
            "Good bye!",
        ]
    );

    let mut second = Session::with_book(storage::load(&path), path.clone());
    assert_eq!(second.book().names(), vec!["Jane", "John"]);

    let john = second.book().find("John").unwrap();
    let phones: Vec<&str> = john.phones().iter().map(Phone::as_str).collect();
    assert_eq!(phones, vec!["1112223333", "5555555555"]);

    let (_, replies) = converse(&mut second, "all\nclose\n");
    assert_eq!(
        replies[0],
        "Contact name: Jane, phones: -, birthday: 15.06.1985\n\
         Contact name: John, phones: 1112223333; 5555555555, birthday: -"
    );
}

#[test]
fn test_corrupt_file_starts_empty_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    std::fs::write(&path, "not a book").unwrap();

    let mut session = Session::with_book(storage::load(&path), path.clone());
    assert!(session.book().is_empty());

    let (_, replies) = converse(&mut session, "all\nadd Ann 0987654321\nexit\n");
    assert_eq!(replies[0], "No contacts yet.");

    assert_eq!(storage::load(&path).names(), vec!["Ann"]);
}
