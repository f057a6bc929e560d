//! Interactive demo: both forms on one in-memory document.
//!
//! Fields are addressed by their configured element ids, actions by their
//! trigger ids (with `login` / `otp` / `reset` shortcuts):
//!
//! ```text
//! > set username alice
//! > set password hunter2
//! > click loginBtn
//! [!] Login attempt with username: alice
//! ```

use std::io::{BufRead, Write};

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use gatehouse_adapters::{FieldBindings, FormSetting, InMemoryDocument, PlaceholderGateway};
use gatehouse_core::Field;
use gatehouse_form_service::{FormEvent, FormService};
use gatehouse_terminal::TerminalModal;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let setting = FormSetting::load()?;
    let document = InMemoryDocument::new();
    let service = FormService::attach(
        document.clone(),
        TerminalModal::non_blocking(),
        PlaceholderGateway::new(),
    );

    tracing::info!("forms attached, document ready");
    println!("gatehouse demo - set <field> <value>, click <trigger>, show, quit");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse(line.trim(), &setting.bindings) {
            Some(Command::Set(field, value)) => document.set_value(field, value),
            Some(Command::Click(event)) => {
                service.handle(event);
            }
            Some(Command::Show) => show(&document, &setting.bindings),
            Some(Command::Quit) => break,
            None => println!("unrecognized command: {}", line.trim()),
        }
    }

    Ok(())
}

enum Command {
    Set(Field, String),
    Click(FormEvent),
    Show,
    Quit,
}

fn parse(line: &str, bindings: &FieldBindings) -> Option<Command> {
    let mut parts = line.splitn(3, char::is_whitespace);
    match parts.next()? {
        "set" => {
            let field = bindings.field_for(parts.next()?)?;
            // A missing value means the user cleared the field.
            let value = parts.next().unwrap_or_default().to_string();
            Some(Command::Set(field, value))
        }
        "click" => Some(Command::Click(event_for(parts.next()?, bindings)?)),
        token @ ("login" | "otp" | "reset") => {
            let shortcut = match token {
                "login" => FormEvent::LoginSubmitted,
                "otp" => FormEvent::OtpRequested,
                _ => FormEvent::ResetSubmitted,
            };
            Some(Command::Click(shortcut))
        }
        "show" => Some(Command::Show),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn event_for(trigger: &str, bindings: &FieldBindings) -> Option<FormEvent> {
    if trigger == bindings.login_trigger {
        Some(FormEvent::LoginSubmitted)
    } else if trigger == bindings.get_otp_trigger {
        Some(FormEvent::OtpRequested)
    } else if trigger == bindings.reset_trigger {
        Some(FormEvent::ResetSubmitted)
    } else {
        None
    }
}

fn show(document: &InMemoryDocument, bindings: &FieldBindings) {
    use gatehouse_core::FormDocument;

    for field in [
        Field::Username,
        Field::Password,
        Field::NewPassword,
        Field::ConfirmPassword,
        Field::Otp,
    ] {
        let value = document.value(field);
        let shown = match field {
            Field::Password | Field::NewPassword | Field::ConfirmPassword if !value.is_empty() => {
                "********".to_string()
            }
            _ => value,
        };
        println!("  {:>16}: {shown}", bindings.element_id(field));
    }
    if let Some(field) = document.focused() {
        println!("  focus -> {}", bindings.element_id(field));
    }
}

fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
