//! Request construction and response decoding for the Steam Web API.
//!
//! ```no_run
//! use serde_json::Value;
//! use steamweb::{Config, Endpoint, Parameter, WebRequest};
//!
//! const GET_FRIEND_LIST: Endpoint = Endpoint::new("ISteamUser", "GetFriendList", 1);
//!
//! # async fn run() -> steamweb::Result<()> {
//! let request = WebRequest::new(Config::from_env(), "8A05823474AB641D684EBD95AB5F2E47")?;
//! let friends: Value = request
//!     .fetch_json_with(&GET_FRIEND_LIST, vec![Parameter::new("steamid", "76561197960435530")])
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod api_client;
mod command;
mod config;
mod endpoint;
mod env;
mod error;
mod parameter;
mod web_request;

pub use {
    command::build_command,
    config::{Config, STEAM_API_URL},
    endpoint::Endpoint,
    env::{BASE_URL_VAR, TIMEOUT_VAR},
    error::{Error, Result},
    parameter::{Parameter, DEVELOPER_KEY_PARAM},
    web_request::{decode, sanitize_response, WebRequest}
};
