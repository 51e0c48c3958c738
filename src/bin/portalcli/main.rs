mod render;

use anyhow::{bail, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use portal_client::{
    api_interfaces::ApiResult,
    constants::DEFAULT_BASE_URL,
    error::GetError,
    ids::{OptionId, QueueId},
    view::{CheckboxView, MemoryCheckbox, MemoryTable, MemoryText},
    widgets::{
        RenderOutcome, UserInfoWidget, UserOptionsWidget, UserPhonesWidget, UserQueuesWidget,
    },
    Client, Endpoints, Session,
};
use serde_json::json;

use render::{INFO_HEADERS, LEGACY_INFO_HEADERS, PHONE_HEADERS, QUEUE_HEADERS};

#[derive(Parser, Debug)]
#[command(about = "Look at and change your calling settings in the user portal")]
struct CliArgs {
    #[command(subcommand)]
    pub subcommand: Command,

    #[command(flatten)]
    pub global_opts: GlobalOpts,
}

#[derive(Args, Debug)]
struct GlobalOpts {
    #[arg(
        short = 'u',
        long,
        env = "PORTAL_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        global = true,
        help = "Base URL of the portal"
    )]
    pub base_url: String,

    #[arg(
        short = 's',
        long,
        env = "PORTAL_SESSION",
        hide_env_values = true,
        global = true,
        help = "Session cookie of a logged-in portal user"
    )]
    pub session: Option<String>,

    #[arg(long, global = true, help = "Print JSON instead of tables")]
    pub json: bool,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(flatten)]
    pub endpoint_opts: EndpointOpts,
}

#[derive(Args, Debug)]
struct EndpointOpts {
    #[arg(
        long,
        global = true,
        help = "Use the deprecated endpoint paths without the /api prefix"
    )]
    pub legacy: bool,

    #[arg(long, global = true, help = "Path of the user info endpoint")]
    pub user_info_path: Option<String>,

    #[arg(long, global = true, help = "Path of the user options endpoint")]
    pub user_options_path: Option<String>,

    #[arg(long, global = true, help = "Path of the user phones endpoint")]
    pub user_phones_path: Option<String>,

    #[arg(long, global = true, help = "Path of the user queues endpoint")]
    pub user_queues_path: Option<String>,
}

impl EndpointOpts {
    fn endpoints(&self) -> Endpoints {
        let base = if self.legacy {
            Endpoints::legacy()
        } else {
            Endpoints::default()
        };
        Endpoints {
            user_info: self.user_info_path.clone().unwrap_or(base.user_info),
            user_options: self.user_options_path.clone().unwrap_or(base.user_options),
            user_phones: self.user_phones_path.clone().unwrap_or(base.user_phones),
            user_queues: self.user_queues_path.clone().unwrap_or(base.user_queues),
        }
    }
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    #[clap(name = "info", about = "Show your numbers and calling location")]
    Info,

    #[clap(name = "options", about = "Show call intercept and call waiting")]
    Options,

    #[clap(name = "phones", about = "List your phones")]
    Phones,

    #[clap(name = "queues", about = "List the call queues you are an agent of")]
    Queues,

    #[clap(name = "dashboard", about = "Load everything at once")]
    Dashboard,

    #[clap(name = "set-option", about = "Turn call intercept or call waiting on or off")]
    SetOption {
        #[arg(help = "callIntercept or callWaiting")]
        id: OptionId,
        state: Switch,
    },

    #[clap(name = "join-queue", about = "Join or leave a call queue")]
    JoinQueue {
        #[arg(help = "Queue id as listed by `queues`: location_id.queue_id")]
        queue: QueueId,
        state: Switch,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Switch {
    On,
    Off,
}

impl Switch {
    fn is_on(self) -> bool {
        self == Switch::On
    }
}

type InfoWidget = UserInfoWidget<MemoryTable, MemoryText>;
type OptionsWidget = UserOptionsWidget<MemoryCheckbox>;
type PhonesWidget = UserPhonesWidget<MemoryText, MemoryTable>;
type QueuesWidget = UserQueuesWidget<MemoryText, MemoryTable>;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    stderrlog::new()
        .verbosity(args.global_opts.verbosity as usize + 1)
        .module(module_path!())
        .module("portal_client")
        .init()?;

    let session = args.global_opts.session.as_deref().map(Session::from_raw);
    if session.is_none() {
        debug!("no session configured, requests will be anonymous");
    }
    let client = Client::new(
        portal_client::default_http_client()?,
        &args.global_opts.base_url,
        Some(args.global_opts.endpoint_opts.endpoints()),
        session,
    )?;
    let json = args.global_opts.json;

    match args.subcommand {
        Command::Info => {
            let widget = info_widget(&client);
            check(widget.refresh().await?)?;
            print_info(&widget, json);
        }
        Command::Options => {
            let widget = options_widget(&client);
            check(widget.refresh().await?)?;
            print_options(&widget, json);
        }
        Command::Phones => {
            let widget = phones_widget(&client);
            let outcome = widget.refresh().await?;
            print_phones(&widget, json);
            check(outcome)?;
        }
        Command::Queues => {
            let widget = queues_widget(&client);
            let outcome = widget.refresh().await?;
            print_queues(&widget, json);
            check(outcome)?;
        }
        Command::Dashboard => dashboard(&client, json).await,
        Command::SetOption { id, state } => {
            let widget = options_widget(&client);
            check(widget.refresh().await?)?;
            if let ApiResult::Failure { message } = widget.toggle(id, state.is_on()).await? {
                bail!("updating {} failed: {}", id, message);
            }
            print_options(&widget, json);
        }
        Command::JoinQueue { queue, state } => {
            let widget = queues_widget(&client);
            let outcome = widget.set_joined(&queue, state.is_on()).await?;
            print_queues(&widget, json);
            check(outcome)?;
        }
    }

    Ok(())
}

fn info_widget(client: &Client) -> InfoWidget {
    UserInfoWidget::new(client.clone(), MemoryTable::default(), MemoryText::default())
}

fn options_widget(client: &Client) -> OptionsWidget {
    UserOptionsWidget::new(
        client.clone(),
        MemoryCheckbox::default(),
        MemoryCheckbox::default(),
    )
}

fn phones_widget(client: &Client) -> PhonesWidget {
    UserPhonesWidget::new(client.clone(), MemoryText::default(), MemoryTable::default())
}

fn queues_widget(client: &Client) -> QueuesWidget {
    UserQueuesWidget::new(client.clone(), MemoryText::default(), MemoryTable::default())
}

fn check(outcome: RenderOutcome) -> Result<()> {
    match outcome {
        RenderOutcome::Failed(message) => bail!("the portal reported an error: {}", message),
        _ => Ok(()),
    }
}

fn print_info(widget: &InfoWidget, json: bool) {
    let rows = widget.numbers().rows();
    let headers: &[&str] = match rows.first() {
        Some(row) if row.len() == LEGACY_INFO_HEADERS.len() => &LEGACY_INFO_HEADERS,
        _ => &INFO_HEADERS,
    };
    if json {
        println!(
            "{}",
            json!({
                "location": widget.location().text(),
                "numbers": render::json_rows(headers, &rows),
            })
        );
    } else {
        println!("{}", widget.location().text());
        println!("{}", render::table(headers, &rows));
    }
}

fn print_options(widget: &OptionsWidget, json: bool) {
    if json {
        let flags = OptionId::ALL
            .iter()
            .map(|id| (id.to_string(), json!(widget.checkbox(*id).is_checked())))
            .collect::<serde_json::Map<_, _>>();
        println!("{}", serde_json::Value::Object(flags));
    } else {
        for id in OptionId::ALL {
            let mark = if widget.checkbox(id).is_checked() { "x" } else { " " };
            println!("[{}] {}", mark, id);
        }
    }
}

fn print_status_table(status: &MemoryText, table: &MemoryTable, headers: &[&str], json: bool) {
    let status = status.text();
    let rows = table.rows();
    if json {
        println!(
            "{}",
            json!({"status": status, "rows": render::json_rows(headers, &rows)})
        );
        return;
    }
    if !status.is_empty() {
        eprintln!("{}", status);
    }
    println!("{}", render::table(headers, &rows));
}

fn print_phones(widget: &PhonesWidget, json: bool) {
    print_status_table(widget.status(), widget.table(), &PHONE_HEADERS, json);
}

fn print_queues(widget: &QueuesWidget, json: bool) {
    print_status_table(widget.status(), widget.table(), &QUEUE_HEADERS, json);
}

fn report(name: &str, outcome: Result<RenderOutcome, GetError>) {
    match outcome {
        Ok(RenderOutcome::Failed(message)) => eprintln!("{}: {}", name, message),
        Err(e) => eprintln!("{}: {}", name, e),
        Ok(_) => {}
    }
}

/// Refresh all four widgets concurrently, like the portal's landing page.
async fn dashboard(client: &Client, json: bool) {
    let info = info_widget(client);
    let options = options_widget(client);
    let phones = phones_widget(client);
    let queues = queues_widget(client);

    let progress = ProgressBar::new(4);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let (info_outcome, options_outcome, phones_outcome, queues_outcome) = futures::join!(
        async {
            let outcome = info.refresh().await;
            progress.inc(1);
            outcome
        },
        async {
            let outcome = options.refresh().await;
            progress.inc(1);
            outcome
        },
        async {
            let outcome = phones.refresh().await;
            progress.inc(1);
            outcome
        },
        async {
            let outcome = queues.refresh().await;
            progress.inc(1);
            outcome
        },
    );
    progress.finish_and_clear();

    report("info", info_outcome);
    report("options", options_outcome);
    report("phones", phones_outcome);
    report("queues", queues_outcome);

    print_info(&info, json);
    print_options(&options, json);
    print_phones(&phones, json);
    print_queues(&queues, json);
}
