//! Executes parsed commands against the stores.

use crate::cli::{Cli, Command, MessageCommand, UserCommand};
use crate::{ConsoleConfig, render};
use anyhow::{Context, Result, bail};
use desk_model::validation::validate_email;
use desk_model::{
    Message, NewMessage, NewUser, Record, RecordId, Session, UserRecord, Validate,
    ValidationError,
};
use desk_remote::HttpCollection;
use desk_store::{CollectionStore, FileKeyValueStore, SessionStore, StoreError, StoreResult};
use std::io::Write;
use tracing::debug;

type HttpStore<R> = CollectionStore<HttpCollection<R>>;

/// Runs `cli.command`, writing user-facing output to `out`.
///
/// `desk shell` reads further commands from stdin until end of input.
pub async fn run(cli: &Cli, config: &ConsoleConfig, out: &mut impl Write) -> Result<()> {
    let mut console = Console::open(config.clone());
    match &cli.command {
        Command::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            console.shell(stdin, out).await
        }
        command => console.execute(command, out).await,
    }
}

/// One console session.
///
/// Collection stores are opened on first use and kept until logout, so a
/// record added by one command is visible to the next.
pub struct Console {
    config: ConsoleConfig,
    session: SessionStore<FileKeyValueStore>,
    messages: Option<HttpStore<Message>>,
    users: Option<HttpStore<UserRecord>>,
}

impl Console {
    /// Reads the saved session. No remote call is made until a collection
    /// command runs.
    pub fn open(config: ConsoleConfig) -> Self {
        let session = SessionStore::open(FileKeyValueStore::new(&config.session_dir));
        Self {
            config,
            session,
            messages: None,
            users: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Runs a single command.
    pub async fn execute(&mut self, command: &Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::Login { email } => {
                let email = email.trim();
                if !validate_email(email) {
                    bail!("enter a valid email address");
                }
                self.session.login(Session::new(email))?;
                writeln!(out, "Logged in as {email}")?;
            }
            Command::Logout => {
                self.session.logout()?;
                self.messages = None;
                self.users = None;
                writeln!(out, "Logged out")?;
            }
            Command::Whoami => match self.session.current_session() {
                Some(current) => writeln!(out, "{}", current.email)?,
                None => writeln!(out, "Not logged in")?,
            },
            Command::Messages(command) => {
                self.require_login()?;
                self.run_messages(command, out).await?;
            }
            Command::Users(command) => {
                self.require_login()?;
                self.run_users(command, out).await?;
            }
            Command::Shell => bail!("already in a shell"),
        }

        Ok(())
    }

    fn require_login(&self) -> Result<()> {
        match self.session.current_session() {
            Some(current) => {
                debug!("Acting as {}", current.email);
                Ok(())
            }
            None => bail!("not logged in; run `desk login <email>` first"),
        }
    }

    async fn run_messages(
        &mut self,
        command: &MessageCommand,
        out: &mut impl Write,
    ) -> Result<()> {
        let rows_per_page = self.config.rows_per_page;

        match command {
            MessageCommand::List(args) => {
                let store = loaded(&mut self.messages, &self.config).await?;
                let page = store.page(args.page, rows_per_page).await;
                render::message_page(out, &page)?;
            }
            MessageCommand::Add { title, body } => {
                let draft = NewMessage::new(title.as_str(), body.as_str());
                reject(out, &draft.validate())?;

                let store = loaded(&mut self.messages, &self.config).await?;
                let added = submitted(out, store.submit_new(draft).await)?;
                writeln!(out, "Added message {}", added.id)?;
                render::message_row(out, &added)?;
            }
            MessageCommand::Update { id, title, body } => {
                let id = RecordId::new(*id);
                let store = loaded(&mut self.messages, &self.config).await?;
                let current = store
                    .get(id)
                    .await
                    .with_context(|| format!("no message with id {id} in the current list"))?;

                let edited = Message {
                    id,
                    title: title.clone().unwrap_or(current.title),
                    body: body.clone().unwrap_or(current.body),
                };
                let updated = submitted(out, store.submit_update(edited).await)?;
                writeln!(out, "Updated message {id}")?;
                render::message_row(out, &updated)?;
            }
            MessageCommand::Remove { id } => {
                let id = RecordId::new(*id);
                let store = loaded(&mut self.messages, &self.config).await?;
                store.remove(id).await?;
                writeln!(out, "Removed message {id}")?;
            }
        }

        Ok(())
    }

    async fn run_users(&mut self, command: &UserCommand, out: &mut impl Write) -> Result<()> {
        let rows_per_page = self.config.rows_per_page;

        match command {
            UserCommand::List(args) => {
                let store = loaded(&mut self.users, &self.config).await?;
                let page = store.page(args.page, rows_per_page).await;
                render::user_page(out, &page)?;
            }
            UserCommand::Add { name, email, phone } => {
                let draft = NewUser::new(name.as_str(), email.as_str(), phone.as_str());
                reject(out, &draft.validate())?;

                let store = loaded(&mut self.users, &self.config).await?;
                let added = submitted(out, store.submit_new(draft).await)?;
                writeln!(out, "Added user {}", added.id)?;
                render::user_row(out, &added)?;
            }
            UserCommand::Update {
                id,
                name,
                email,
                phone,
            } => {
                let id = RecordId::new(*id);
                let store = loaded(&mut self.users, &self.config).await?;
                let current = store
                    .get(id)
                    .await
                    .with_context(|| format!("no user with id {id} in the current list"))?;

                let edited = UserRecord {
                    id,
                    name: name.clone().unwrap_or(current.name),
                    email: email.clone().unwrap_or(current.email),
                    phone: phone.clone().unwrap_or(current.phone),
                };
                let updated = submitted(out, store.submit_update(edited).await)?;
                writeln!(out, "Updated user {id}")?;
                render::user_row(out, &updated)?;
            }
            UserCommand::Remove { id } => {
                let id = RecordId::new(*id);
                let store = loaded(&mut self.users, &self.config).await?;
                store.remove(id).await?;
                writeln!(out, "Removed user {id}")?;
            }
        }

        Ok(())
    }
}

/// Returns the store held in `slot`, opening and loading it first if needed.
///
/// A store whose load failed is not kept, so the next command retries.
async fn loaded<'a, R: Record>(
    slot: &'a mut Option<HttpStore<R>>,
    config: &ConsoleConfig,
) -> Result<&'a HttpStore<R>> {
    let store = match slot.take() {
        Some(store) => store,
        None => {
            let client = HttpCollection::<R>::new(&config.remote)?;
            let store = CollectionStore::open(client, config.store.clone()).await;
            if let Some(error) = store.error().await {
                bail!("failed to load {} list: {error}", R::KIND);
            }
            store
        }
    };
    Ok(slot.insert(store))
}

/// Prints field errors and fails, so nothing is sent for an invalid form.
fn reject(out: &mut impl Write, errors: &[ValidationError]) -> Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    render::validation_errors(out, errors)?;
    bail!("{} field(s) failed validation", errors.len())
}

fn submitted<R>(out: &mut impl Write, result: StoreResult<R>) -> Result<R> {
    match result {
        Ok(record) => Ok(record),
        Err(StoreError::Invalid(errors)) => {
            render::validation_errors(out, &errors)?;
            bail!("{} field(s) failed validation", errors.len())
        }
        Err(e) => Err(e.into()),
    }
}
