use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::{AppContext, Result, ShopError};
use crate::domain::item::parse_quantity;
use crate::domain::LocationCoordinate;
use crate::location::{request_location, LocateOutcome, LocationSession};
use crate::store::ItemStore;

const HELP: &str = "\
Commands:
  add <name> <qty>         add an item (uses the current address)
  edit <id>                put an item in edit mode
  save <id> <name> <qty>   save the edit
  delete <id>              remove an item
  list                     show the list
  locate                   look up the address of the current position
  addresses                show the last address candidates
  use <n>                  attach candidate <n> to new and edited items
  help                     this text
  quit                     end the session";

/// One-shot reverse geocode.
pub async fn geocode(ctx: &AppContext, lat: f64, lng: f64) -> Result<()> {
    let coordinate = LocationCoordinate::new(lat, lng);
    if !coordinate.is_valid() {
        return Err(ShopError::Location(format!("{} is out of range", coordinate)));
    }

    let results = ctx.resolver()?.resolve_address(coordinate).await?;
    if results.is_empty() {
        println!("No address found near {}", coordinate);
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        println!("{:>2}. {}", i + 1, result.formatted_address);
    }
    Ok(())
}

struct Shell<'a, W> {
    ctx: &'a AppContext,
    store: ItemStore,
    location: LocationSession,
    out: W,
}

/// Runs an interactive session. The list lives only as long as this call.
pub async fn run_shell<R, W>(ctx: &AppContext, input: R, out: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut shell = Shell {
        ctx,
        store: ctx.new_store(),
        location: LocationSession::new(),
        out,
    };

    writeln!(shell.out, "shoplist shell - type `help` for commands")?;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }
        shell.execute(line).await?;
    }
    Ok(())
}

impl<W: Write> Shell<'_, W> {
    async fn execute(&mut self, line: &str) -> Result<()> {
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let args: Vec<&str> = rest.split_whitespace().collect();

        match command {
            "add" => self.add(&args),
            "edit" => self.edit(&args),
            "save" => self.save(&args),
            "delete" | "rm" => self.delete(&args),
            "list" | "ls" => self.list(),
            "locate" => self.locate().await,
            "addresses" => self.addresses(),
            "use" => self.use_candidate(&args),
            "help" => Ok(writeln!(self.out, "{}", HELP)?),
            other => Ok(writeln!(self.out, "Unknown command: {} (try `help`)", other)?),
        }
    }

    fn add(&mut self, args: &[&str]) -> Result<()> {
        let (name, quantity) = split_name_quantity(args);
        match self.store.add(&name, quantity, None) {
            Some(id) => writeln!(self.out, "Added #{}", id)?,
            None => writeln!(self.out, "Not added: usage is `add <name> <qty>`")?,
        }
        Ok(())
    }

    fn edit(&mut self, args: &[&str]) -> Result<()> {
        let Some(id) = parse_id(args) else {
            writeln!(self.out, "Usage: edit <id>")?;
            return Ok(());
        };
        self.store.begin_edit(id);
        match self.store.get(id) {
            Some(item) => writeln!(
                self.out,
                "Editing #{}: {} x{} (save with `save {} <name> <qty>`)",
                item.id, item.name, item.quantity, item.id
            )?,
            None => writeln!(self.out, "No item #{}", id)?,
        }
        Ok(())
    }

    fn save(&mut self, args: &[&str]) -> Result<()> {
        let (name, quantity) = split_name_quantity(args.get(1..).unwrap_or_default());
        let (Some(id), Some(quantity)) = (parse_id(args), parse_quantity(quantity)) else {
            writeln!(self.out, "Usage: save <id> <name> <qty>")?;
            return Ok(());
        };
        if self.store.get(id).is_none() {
            writeln!(self.out, "No item #{}", id)?;
            return Ok(());
        }
        if self.store.commit_edit(id, &name, quantity) {
            writeln!(self.out, "Saved #{}", id)?;
        } else {
            writeln!(self.out, "Not saved: name is blank")?;
        }
        Ok(())
    }

    fn delete(&mut self, args: &[&str]) -> Result<()> {
        let Some(id) = parse_id(args) else {
            writeln!(self.out, "Usage: delete <id>")?;
            return Ok(());
        };
        let before = self.store.len();
        self.store.delete(id);
        if self.store.len() < before {
            writeln!(self.out, "Deleted #{}", id)?;
        } else {
            writeln!(self.out, "No item #{}", id)?;
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.out, "No items")?;
            return Ok(());
        }
        for item in self.store.items() {
            let marker = if item.is_editing { "*" } else { " " };
            writeln!(
                self.out,
                "{}#{} {} x{} @ {}",
                marker,
                item.id,
                item.name,
                item.quantity,
                item.display_address()
            )?;
        }
        Ok(())
    }

    async fn locate(&mut self) -> Result<()> {
        let outcome =
            request_location(self.ctx.location.as_ref(), &mut self.location.permission).await;
        let coordinate = match outcome {
            Ok(LocateOutcome::Located(coordinate)) => coordinate,
            Ok(LocateOutcome::Denied { advisory, .. }) => {
                writeln!(self.out, "{}", advisory)?;
                return Ok(());
            }
            Err(e) => {
                writeln!(self.out, "Could not get current location: {}", e)?;
                return Ok(());
            }
        };

        let resolver = match self.ctx.resolver() {
            Ok(resolver) => resolver.clone(),
            Err(e) => {
                self.location.update_location(coordinate);
                writeln!(self.out, "Located at {}; {}", coordinate, e)?;
                return Ok(());
            }
        };

        match self
            .location
            .fetch_address(resolver.as_ref(), coordinate)
            .await
        {
            Ok(_) => {
                self.store
                    .set_ambient_address(self.location.primary_address());
                writeln!(
                    self.out,
                    "Address: {}",
                    if self.store.ambient_address().is_empty() {
                        "(none found)"
                    } else {
                        self.store.ambient_address()
                    }
                )?;
            }
            Err(e) => writeln!(self.out, "Address lookup failed: {}", e)?,
        }
        Ok(())
    }

    fn addresses(&mut self) -> Result<()> {
        if self.location.addresses().is_empty() {
            writeln!(self.out, "No address candidates")?;
        }
        for (i, result) in self.location.addresses().iter().enumerate() {
            writeln!(self.out, "{:>2}. {}", i + 1, result.formatted_address)?;
        }
        Ok(())
    }

    fn use_candidate(&mut self, args: &[&str]) -> Result<()> {
        let candidate = args
            .first()
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.location.addresses().get(i));
        match candidate {
            Some(result) => {
                let address = result.formatted_address.clone();
                writeln!(self.out, "Using: {}", address)?;
                self.store.set_ambient_address(address);
            }
            None => writeln!(self.out, "Usage: use <n> (see `addresses`)")?,
        }
        Ok(())
    }
}

fn parse_id(args: &[&str]) -> Option<u32> {
    args.first().and_then(|s| s.parse().ok())
}

/// Last word is the quantity, everything before it is the name.
fn split_name_quantity<'a>(args: &[&'a str]) -> (String, &'a str) {
    match args.split_last() {
        Some((quantity, name)) => (name.join(" "), quantity),
        None => (String::new(), ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name_quantity() {
        assert_eq!(
            split_name_quantity(&["Oat", "milk", "2"]),
            ("Oat milk".to_string(), "2")
        );
        assert_eq!(split_name_quantity(&["Milk"]), (String::new(), "Milk"));
        assert_eq!(split_name_quantity(&[]), (String::new(), ""));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(&["3"]), Some(3));
        assert_eq!(parse_id(&["x"]), None);
        assert_eq!(parse_id(&[]), None);
    }
}
