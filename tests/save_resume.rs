//! Save and resume through the filesystem

use subset::dictionary::Dictionary;
use subset::game::{Ending, GameSession, GuessOutcome, Message, Phase};
use subset::puzzle::{Puzzle, Seed};
use subset::save::{SaveFile, SaveStore};
use tempfile::tempdir;

const SEED: i64 = 1_613_412_345;

#[test]
fn saved_game_resumes_with_same_puzzle_and_words() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".subset").join("savefile.txt");

    let mut session = GameSession::new(
        Seed::new(SEED),
        Dictionary::embedded(),
        SaveStore::new(&path),
    )
    .unwrap();

    let words: Vec<String> = session
        .puzzle()
        .valid_words()
        .iter()
        .rev()
        .take(3)
        .cloned()
        .collect();
    for word in &words {
        session.handle_input(word);
    }
    let score = session.status().score;

    session.handle_input("e");
    assert_eq!(session.phase(), Phase::ConfirmingSave);
    assert_eq!(session.confirm(true).unwrap(), Some(Ending::Saved));

    let text = std::fs::read_to_string(&path).unwrap();
    let mut expected = format!("#seed\n{SEED}\n#found\n");
    for word in &words {
        expected.push_str(word);
        expected.push('\n');
    }
    assert_eq!(text, expected);

    let mut resumed =
        GameSession::open(Seed::new(1), Dictionary::embedded(), SaveStore::new(&path)).unwrap();
    assert_eq!(resumed.take_message(), Some(Message::Resumed));
    assert_eq!(resumed.seed(), Seed::new(SEED));
    assert_eq!(resumed.state().found(), words.as_slice());
    assert_eq!(resumed.status().score, score);
    assert_eq!(
        resumed.puzzle().pangram_word(),
        session.puzzle().pangram_word()
    );

    // already played words stay played after a resume
    let again = resumed.guess(&words[0]);
    assert_eq!(
        again,
        GuessOutcome::AlreadyPlayed {
            word: words[0].clone()
        }
    );
}

#[test]
fn quitting_removes_the_save() {
    let dir = tempdir().unwrap();
    let store = SaveStore::new(dir.path().join("savefile.txt"));
    store
        .save(&SaveFile::new(Seed::new(SEED), Vec::new()))
        .unwrap();

    let mut session = GameSession::open(Seed::new(1), Dictionary::embedded(), store).unwrap();
    session.handle_input("q");
    assert_eq!(session.confirm(true).unwrap(), Some(Ending::Abandoned));
    assert!(!session.store().path().exists());

    // the next start is a new game
    let store = session.store().clone();
    let mut fresh = GameSession::open(Seed::new(2), Dictionary::embedded(), store).unwrap();
    assert_eq!(fresh.take_message(), Some(Message::NewGame));
    assert_eq!(fresh.seed(), Seed::new(2));
}

#[test]
fn resumed_puzzle_matches_direct_generation() {
    let dictionary = Dictionary::embedded();
    let direct = Puzzle::from_seed(Seed::new(SEED), &dictionary).unwrap();

    let dir = tempdir().unwrap();
    let store = SaveStore::new(dir.path().join("savefile.txt"));
    store
        .save(&SaveFile::new(Seed::new(SEED), Vec::new()))
        .unwrap();
    let session = GameSession::open(Seed::new(3), dictionary, store).unwrap();

    assert_eq!(session.puzzle().letters(), direct.letters());
    assert_eq!(session.puzzle().required_letter(), direct.required_letter());
    assert_eq!(session.puzzle().valid_words(), direct.valid_words());
    assert_eq!(session.puzzle().pangrams(), direct.pangrams());
}

#[test]
fn malformed_save_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("savefile.txt");
    std::fs::write(&path, "#seed\nlast tuesday\n#found\ngrade\n").unwrap();

    let result = GameSession::open(Seed::new(1), Dictionary::embedded(), SaveStore::new(path));
    assert!(result.is_err());
}
