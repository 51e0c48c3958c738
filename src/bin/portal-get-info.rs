use anyhow::{bail, Result};
use clap::Parser;
use portal_client::{
    api_interfaces::ApiResult, constants::DEFAULT_BASE_URL, Client, Endpoints, Session,
};

/// Print the portal's user info response as JSON.
#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'u', long, env = "PORTAL_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[arg(short = 's', long, env = "PORTAL_SESSION", hide_env_values = true)]
    session: Option<String>,
    #[arg(long)]
    legacy: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let endpoints = if args.legacy {
        Endpoints::legacy()
    } else {
        Endpoints::default()
    };
    let client = Client::new(
        portal_client::default_http_client()?,
        &args.base_url,
        Some(endpoints),
        args.session.as_deref().map(Session::from_raw),
    )?;
    match client.get_user_info().await? {
        ApiResult::Success(info) => println!("{}", serde_json::to_string_pretty(&info)?),
        ApiResult::Failure { message } => bail!("the portal reported an error: {}", message),
    }
    Ok(())
}
