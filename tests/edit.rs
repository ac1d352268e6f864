use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn edit_contact() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .arg("--quiet")
        .write_stdin(
            "1\n08031234567\ny\nAlice\nMartinez\n\
            1\n08062866694\ny\nWayne\nLopez\n\
            2\n08031234567\n09123456789\ny\nAlicia\nMartin\n\
            4\n5\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the phone number to search for the contact: "))
        .stdout(predicate::str::contains("Contact edited successfully!"))
        // Position is kept after the edit
        .stdout(predicate::str::contains(
            "Contact 1: Alicia Martin\nPhone Number: 09123456789",
        ))
        .stdout(predicate::str::contains("Contact 2: Wayne Lopez"))
        .stdout(predicate::str::contains("Alice Martinez").not());
}

#[test]
fn edit_missing_contact() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .arg("--quiet")
        .write_stdin("1\n555\ny\nAnn\nLee\n2\n404\n404\nn\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact not found with the provided phone number.",
        ))
        .stdout(predicate::str::contains("Contact 1: Ann Lee\nPhone Number: 555"));
}

#[test]
fn edit_first_of_duplicates() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .arg("--quiet")
        .write_stdin("1\n555\ny\nAnn\nLee\n1\n555\ny\nBob\nKing\n2\n555\n555\ny\nCara\nDoe\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 1: Cara Doe"))
        .stdout(predicate::str::contains("Contact 2: Bob King"))
        .stdout(predicate::str::contains("Ann Lee").not());
}
