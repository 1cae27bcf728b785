//! Contact message listing.

use std::io::{self, Write};

use hartna_core::Message;

use super::{CliError, data_dir, open_store};

/// Print stored messages, oldest first.
///
/// # Errors
///
/// Returns an error if the messages cannot be read or printed.
pub async fn list(json: bool) -> Result<(), CliError> {
    let messages = open_store(data_dir()).messages().await?;
    let mut stdout = io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut stdout, &messages)?;
        writeln!(stdout)?;
    } else if messages.is_empty() {
        tracing::info!("No messages");
    } else {
        for message in &messages {
            write_message(&mut stdout, message)?;
        }
    }
    Ok(())
}

fn write_message(out: &mut impl Write, message: &Message) -> io::Result<()> {
    writeln!(
        out,
        "[{}] {} <{}>",
        message.timestamp.format("%Y-%m-%d %H:%M"),
        message.full_name(),
        message.email
    )?;
    if let Some(phone) = &message.phone {
        writeln!(out, "  phone:   {phone}")?;
    }
    writeln!(out, "  id:      {}", message.id)?;
    writeln!(out, "  subject: {}", message.subject)?;
    for line in message.message.lines() {
        writeln!(out, "  | {line}")?;
    }
    writeln!(out)
}
