// The interactive menu loop.
//
// Reads one line at a time, hands the work to the database and prints what
// happened. Storage failures get a one-line message and the loop carries on.

use crate::core::menu::{parse_id, strip_line_ending, MenuChoice, MENU};
use crate::db::Database;
use crate::error::{RecordsError, Result};
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    db: Database,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(db: Database, input: R, output: W) -> Self {
        Self { db, input, output }
    }

    /// Run until the user picks exit or input runs out.
    ///
    /// Only console I/O errors come back from here; database errors are
    /// reported inline.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("Input closed, leaving menu loop");
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.add_record().await?,
                Some(MenuChoice::ShowAll) => self.show_all().await?,
                Some(MenuChoice::Update) => self.update_record().await?,
                Some(MenuChoice::Delete) => self.delete_record().await?,
                Some(MenuChoice::Exit) => break,
                None => writeln!(self.output, "Invalid choice, try again.")?,
            }
        }

        Ok(())
    }

    /// Give back the database (so it can be closed) and the output sink
    pub fn into_parts(self) -> (Database, W) {
        (self.db, self.output)
    }

    async fn add_record(&mut self) -> Result<()> {
        // EOF mid-prompt: the main loop will see it again and stop
        let Some(name) = self.prompt("Enter name: ")? else {
            return Ok(());
        };

        match self.db.create(&name).await {
            Ok(_) => writeln!(self.output, "Record added.")?,
            Err(e) => self.report("adding record", &e)?,
        }

        Ok(())
    }

    async fn show_all(&mut self) -> Result<()> {
        match self.db.list_all().await {
            Ok(records) => {
                for record in records {
                    writeln!(self.output, "{}", record)?;
                }
            }
            Err(e) => self.report("reading records", &e)?,
        }

        Ok(())
    }

    async fn update_record(&mut self) -> Result<()> {
        let Some(id) = self.prompt_id("Enter record Id to update: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter new name: ")? else {
            return Ok(());
        };

        // Zero rows touched still counts as done
        match self.db.update(id, &name).await {
            Ok(_) => writeln!(self.output, "Record updated.")?,
            Err(e) => self.report("updating record", &e)?,
        }

        Ok(())
    }

    async fn delete_record(&mut self) -> Result<()> {
        let Some(id) = self.prompt_id("Enter record Id to delete: ")? else {
            return Ok(());
        };

        match self.db.delete(id).await {
            Ok(_) => writeln!(self.output, "Record deleted.")?,
            Err(e) => self.report("deleting record", &e)?,
        }

        Ok(())
    }

    fn report(&mut self, action: &str, err: &RecordsError) -> Result<()> {
        tracing::warn!("Failed {}: {}", action, err);
        writeln!(self.output, "Error while {}: {}", action, err)?;
        Ok(())
    }

    // `None` means no usable id: either input ended or the user typed junk
    // (in which case they've already been told).
    fn prompt_id(&mut self, text: &str) -> Result<Option<i64>> {
        let Some(raw) = self.prompt(text)? else {
            return Ok(None);
        };

        match parse_id(&raw) {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                tracing::debug!("{}", e);
                writeln!(self.output, "Invalid Id.")?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&line).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Record;
    use std::io::Cursor;

    async fn run_script(db: Database, script: &str) -> (Database, String) {
        let mut console = Console::new(db, Cursor::new(script.as_bytes().to_vec()), Vec::new());
        console.run().await.unwrap();
        let (db, output) = console.into_parts();
        (db, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_exit_immediately() {
        let db = Database::new_test().await.unwrap();
        let (_, output) = run_script(db, "5\n").await;

        assert_eq!(output.matches("Choose an operation:").count(), 1);
        assert!(output.contains("1 - Add record"));
        assert!(output.contains("5 - Exit"));
    }

    #[tokio::test]
    async fn test_eof_ends_loop() {
        let db = Database::new_test().await.unwrap();
        let (_, output) = run_script(db, "").await;
        assert_eq!(output.matches("Choose an operation:").count(), 1);
    }

    #[tokio::test]
    async fn test_add_and_show() {
        let db = Database::new_test().await.unwrap();
        let (db, output) = run_script(db, "1\nBob\n1\nCarol\n2\n5\n").await;

        assert!(output.contains("Enter name: "));
        assert_eq!(output.matches("Record added.").count(), 2);
        assert!(output.contains("Id: 1, Name: Bob\nId: 2, Name: Carol\n"));

        let records = db.list_all().await.unwrap();
        assert_eq!(records, vec![Record::new(1, "Bob"), Record::new(2, "Carol")]);
    }

    #[tokio::test]
    async fn test_show_empty_prints_nothing() {
        let db = Database::new_test().await.unwrap();
        let (_, output) = run_script(db, "2\n5\n").await;
        assert!(!output.contains("Id:"));
    }

    #[tokio::test]
    async fn test_update_record() {
        let db = Database::new_test().await.unwrap();
        db.create("Alice").await.unwrap();

        let (db, output) = run_script(db, "3\n1\nAlicia\n5\n").await;

        assert!(output.contains("Enter record Id to update: "));
        assert!(output.contains("Enter new name: "));
        assert!(output.contains("Record updated."));
        assert_eq!(db.list_all().await.unwrap(), vec![Record::new(1, "Alicia")]);
    }

    #[tokio::test]
    async fn test_delete_record() {
        let db = Database::new_test().await.unwrap();
        db.create("Bob").await.unwrap();
        db.create("Carol").await.unwrap();

        let (db, output) = run_script(db, "4\n1\n5\n").await;

        assert!(output.contains("Enter record Id to delete: "));
        assert!(output.contains("Record deleted."));
        assert_eq!(db.list_all().await.unwrap(), vec![Record::new(2, "Carol")]);
    }

    #[tokio::test]
    async fn test_unknown_id_still_confirms() {
        let db = Database::new_test().await.unwrap();
        db.create("Bob").await.unwrap();

        let (db, output) = run_script(db, "3\n99\nGhost\n4\n99\n5\n").await;

        assert!(output.contains("Record updated."));
        assert!(output.contains("Record deleted."));
        assert!(!output.contains("Error while"));
        assert_eq!(db.list_all().await.unwrap(), vec![Record::new(1, "Bob")]);
    }

    #[tokio::test]
    async fn test_bad_id_skips_storage() {
        let db = Database::new_test().await.unwrap();
        db.create("Bob").await.unwrap();

        let (db, output) = run_script(db, "3\nabc\n4\nxyz\n5\n").await;

        assert_eq!(output.matches("Invalid Id.").count(), 2);
        // Never got as far as asking for a name
        assert!(!output.contains("Enter new name: "));
        assert!(!output.contains("Record updated."));
        assert!(!output.contains("Record deleted."));
        assert_eq!(db.list_all().await.unwrap(), vec![Record::new(1, "Bob")]);
    }

    #[tokio::test]
    async fn test_bad_id_line_is_not_read_as_name() {
        let db = Database::new_test().await.unwrap();
        db.create("Bob").await.unwrap();

        // "2" after the bad id must be treated as a menu choice
        let (_, output) = run_script(db, "3\nnope\n2\n5\n").await;
        assert!(output.contains("Invalid Id."));
        assert!(output.contains("Id: 1, Name: Bob"));
    }

    #[tokio::test]
    async fn test_invalid_choice() {
        let db = Database::new_test().await.unwrap();
        let (_, output) = run_script(db, "9\nhello\n5\n").await;

        assert_eq!(output.matches("Invalid choice, try again.").count(), 2);
        assert_eq!(output.matches("Choose an operation:").count(), 3);
    }

    #[tokio::test]
    async fn test_names_keep_inner_whitespace() {
        let db = Database::new_test().await.unwrap();
        let (db, _) = run_script(db, "1\n  Mary Ann \r\n5\n").await;

        assert_eq!(
            db.list_all().await.unwrap(),
            vec![Record::new(1, "  Mary Ann ")]
        );
    }

    #[tokio::test]
    async fn test_storage_errors_are_reported_and_loop_continues() {
        let db = Database::new_test().await.unwrap();
        db.pool().close().await;

        let (_, output) = run_script(db, "1\nBob\n2\n3\n1\nBobby\n4\n1\n5\n").await;

        assert!(output.contains("Error while adding record:"));
        assert!(output.contains("Error while reading records:"));
        assert!(output.contains("Error while updating record:"));
        assert!(output.contains("Error while deleting record:"));
        assert!(!output.contains("Record added."));
        // Menu shown once per command plus the final exit
        assert_eq!(output.matches("Choose an operation:").count(), 5);
    }

    #[tokio::test]
    async fn test_eof_mid_prompt() {
        let db = Database::new_test().await.unwrap();
        let (db, output) = run_script(db, "1\n").await;

        assert!(output.contains("Enter name: "));
        assert!(!output.contains("Record added."));
        assert!(db.list_all().await.unwrap().is_empty());
    }
}
