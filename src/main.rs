use clap::Parser;
use colored::Colorize;
use lending_library::{
    AnimalProfile, Book, LendingReport, LoanEvent, LoanLedger, Patron, SharedBook,
    observers::{DeskAnnouncer, LoanLogger},
};

/// Command-line arguments for the lending demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the lending history as a markdown table
    #[arg(long)]
    table: bool,

    /// Print the lending history as JSON
    #[arg(long)]
    json: bool,

    /// Print summary statistics after the simulation
    #[arg(short, long)]
    stats: bool,

    /// Also run the animal profile showcase
    #[arg(long)]
    animals: bool,
}

fn main() {
    let args = Args::parse();

    run_library_demo(&args);

    if args.animals {
        run_animal_showcase();
    }

    println!("\n{}", "Demonstration complete!".green().bold());
}

/// Run one borrow attempt and record its outcome in the ledger
fn attempt_borrow(ledger: &mut LoanLedger, patron: &mut Patron, book: &SharedBook) {
    let event = if patron.borrow_book(book) {
        LoanEvent::Borrowed(patron.name().to_string())
    } else {
        LoanEvent::BorrowRefused(patron.name().to_string())
    };
    ledger.record(book, event);
}

/// Run one return attempt and record its outcome in the ledger
fn attempt_return(ledger: &mut LoanLedger, patron: &mut Patron, book: &SharedBook) {
    let event = if patron.give_back(book) {
        LoanEvent::Returned(patron.name().to_string())
    } else {
        LoanEvent::ReturnRefused(patron.name().to_string())
    };
    ledger.record(book, event);
}

/// Exercise the lending simulation: borrows, a refused competing borrow,
/// listings and give-backs, with every attempt recorded in the ledger
fn run_library_demo(args: &Args) {
    println!("{}", "Library Lending Demonstration".green().bold());
    println!("=====================================\n");

    let orwell = Book::new("George Orwell", "1984", "123-123").into_shared();
    let tolkien = Book::new("J.R.R. Tolkien", "Lord of the Rings", "4444-123").into_shared();
    let martin = Book::new("George", "Game of Thrones", "6666-123").into_shared();

    let mut alice = Patron::new("Alice", 1);
    let mut bruno = Patron::new("Bruno", 2);

    let mut ledger = LoanLedger::new();
    ledger.register_observer(Box::new(LoanLogger));
    ledger.register_observer(Box::new(DeskAnnouncer));

    attempt_borrow(&mut ledger, &mut alice, &orwell);
    attempt_borrow(&mut ledger, &mut bruno, &martin);
    attempt_borrow(&mut ledger, &mut alice, &tolkien);

    // Bruno asks for a book Alice already holds
    attempt_borrow(&mut ledger, &mut bruno, &orwell);
    println!("{}", orwell.borrow().state().get_description());

    println!();
    LendingReport::print_held_books(&alice);
    LendingReport::print_held_books(&bruno);

    println!();
    attempt_return(&mut ledger, &mut alice, &tolkien);

    // Bruno tries to return a book he never borrowed
    attempt_return(&mut ledger, &mut bruno, &orwell);

    println!();
    LendingReport::print_held_books(&alice);

    println!();
    LendingReport::print_history(ledger.history());

    if args.table {
        println!("\n{}", LendingReport::history_table(ledger.history()));
    }

    if args.json {
        match LendingReport::history_json(ledger.history()) {
            Ok(json) => println!("\n{json}"),
            Err(err) => eprintln!("Failed to render history as JSON: {err}"),
        }
    }

    if args.stats {
        println!();
        LendingReport::print_stats(ledger.history());
    }
}

/// Exercise the animal profile: behavior lines, blank-input fallbacks and
/// sound replacement
fn run_animal_showcase() {
    println!("\n{}", "Animal Profile Showcase".green().bold());
    println!("=====================================\n");

    let mut rex = AnimalProfile::new(Some("Rex"), Some("Mammal"), Some("Bark"));
    println!("{}", rex.emit_sound());
    println!("{}", rex.feed());
    println!("{}", rex.sleep());
    println!("{}", rex.describe());

    // A blank name falls back to the placeholder
    let mut stray = AnimalProfile::new(Some(""), Some("Mammal"), Some("Meow"));
    println!("\n{}", stray.describe());

    // And so does a blank replacement sound
    stray.set_sound(Some("   "));
    println!("{}", stray.emit_sound());

    rex.set_sound(Some("Howl"));
    println!("\n{}", rex.emit_sound());
}
