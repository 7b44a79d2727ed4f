//! Loads the family tree from `testfiles/family.pl` and answers a few
//! questions about it.

use hornlog::textual::{pretty, TextualDatabase};
use hornlog::SearchMode;

static FAMILY: &str = include_str!("../testfiles/family.pl");

fn main() {
    let mut tdb = TextualDatabase::new();
    let source = strip_comments(FAMILY);
    tdb.load_str(&source).expect("family.pl should parse");

    ask(&tdb, "parent(john, X).", SearchMode::All);
    ask(&tdb, "grandparent(mary, X).", SearchMode::All);
    ask(&tdb, "ancestor(mary, X).", SearchMode::All);
    ask(&tdb, "ancestor(X, jane).", SearchMode::First);
    ask(&tdb, "parent(jim, X).", SearchMode::All);
}

fn ask(tdb: &TextualDatabase, question: &str, mode: SearchMode) {
    println!("?- {}", question);
    match tdb.run_query(question, mode) {
        Ok(solutions) if solutions.is_empty() => println!("false."),
        Ok(solutions) => {
            for solution in &solutions {
                println!("{}", pretty::solution_to_string(solution));
            }
        }
        Err(err) => println!("error: {}", err),
    }
    println!();
}

fn strip_comments(source: &str) -> String {
    source
        .lines()
        .map(|line| match line.find('%') {
            Some(start) => &line[..start],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
