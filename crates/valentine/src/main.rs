#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

mod render;
mod terminal;

use std::{process::ExitCode, sync::Arc};

use config::{
    Config,
    args::{AppMode, SubmitArgs, get_args},
    file::DEFAULT_CONFIG_FILE_TEXT,
    get_config, load_config_file,
};
use form::{FormController, SubmitError, SubmitOutcome};
use model::{Field, ProfileFields};
use profile_store::{InMemoryProfileStore, ProfileStore, RemoteProfileStore};
use terminal::{SessionResult, Terminal, run_session};
use tokio::io::{BufReader, stdin, stdout};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = get_args();

    if let Some(AppMode::DefaultConfig) = args.mode {
        print!("{}", DEFAULT_CONFIG_FILE_TEXT);
        return ExitCode::SUCCESS;
    }

    let file = match load_config_file(&args) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("{:?}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(file.general.log_timestamp());

    let config = match get_config(&args, file) {
        Ok(config) => config,
        Err(e) => {
            error!("{:?}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Tokio runtime creation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let submitted = runtime.block_on(async { run(args.mode, config).await });
    if submitted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Logs go to stderr. Stdout is reserved for the form.
fn init_logging(log_timestamp: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);

    if log_timestamp {
        builder.init();
    } else {
        builder.without_time().init();
    }
}

async fn run(mode: Option<AppMode>, config: Config) -> bool {
    let Some(store) = create_store(&config) else {
        return false;
    };
    let form = FormController::new(store);

    match mode {
        Some(AppMode::Submit(values)) => submit_once(&form, values).await,
        Some(AppMode::DefaultConfig) | None => {
            let mut terminal = Terminal::new(BufReader::new(stdin()), stdout());
            match run_session(&form, &mut terminal).await {
                Ok(result) => result == SessionResult::Submitted,
                Err(e) => {
                    error!("Terminal input or output failed: {}", e);
                    false
                }
            }
        }
    }
}

fn create_store(config: &Config) -> Option<Arc<dyn ProfileStore>> {
    if config.dry_run() {
        info!("Dry run, profiles are kept in memory");
        return Some(Arc::new(InMemoryProfileStore::new()));
    }

    match RemoteProfileStore::new(config.store()) {
        Ok(store) => {
            if store.is_configured() {
                info!("Profiles are inserted to table {}", store.table());
            }
            Some(Arc::new(store))
        }
        Err(e) => {
            error!("{:?}", e);
            None
        }
    }
}

async fn submit_once(form: &FormController, values: SubmitArgs) -> bool {
    let fields = fields_from_args(values);
    for field in Field::ALL {
        form.set_field(field, fields.get(field));
    }

    let result = form.submit().await;
    println!("{}", render::render_view(&form.view()));

    match result {
        Ok(SubmitOutcome::Submitted) => true,
        Ok(SubmitOutcome::Failed) | Err(SubmitError::Invalid(_)) => false,
        Err(e) => {
            error!("{}", e);
            false
        }
    }
}

fn fields_from_args(values: SubmitArgs) -> ProfileFields {
    ProfileFields {
        name: values.name,
        age: values.age,
        gender: values.gender,
        email: values.email,
        interests: values.interests,
        looking_for: values.looking_for,
        ideal_date: values.ideal_date,
        deal_breakers: values.deal_breakers,
    }
}
