use clap::Parser;
use sealnote::application::{parse_ids, AddNoteService, DeleteNotesService, ListNotesService};
use sealnote::cli::{format_note_list, parse_count, Cli, DEFAULT_LIST_COUNT};
use sealnote::domain::NoteCipher;
use sealnote::error::SealnoteError;
use sealnote::infrastructure::{Config, NoteRepository};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), SealnoteError> {
    let config = Config::load()?;
    let repository = NoteRepository::open(&config.database)?;
    let cipher = NoteCipher::new(config.key.as_bytes())?;

    if let Some(raw_ids) = cli.delete {
        // Validate every id before touching the table
        let ids = parse_ids(&raw_ids)?;
        let service = DeleteNotesService::new(repository);
        service.execute(&ids)?;
        println!("Notes {:?} deleted", ids);
        Ok(())
    } else if let Some(raw_count) = cli.list {
        let count = parse_count(raw_count.as_deref());
        list_notes(repository, cipher, count)
    } else if !cli.text.is_empty() {
        let service = AddNoteService::new(repository, cipher);
        service.execute(&cli.text)?;
        println!("Note saved!");
        Ok(())
    } else {
        list_notes(repository, cipher, DEFAULT_LIST_COUNT)
    }
}

fn list_notes(
    repository: NoteRepository,
    cipher: NoteCipher,
    count: u32,
) -> Result<(), SealnoteError> {
    let service = ListNotesService::new(repository, cipher);
    let notes = service.execute(count)?;
    print!("{}", format_note_list(&notes));
    Ok(())
}
