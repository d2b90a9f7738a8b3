/*
 * SteamWeb - A Steam Web API client
 * Copyright (C) 2025 Josh Kropf <josh@slashdev.ca>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use std::fmt;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api_client::ApiClient;
use crate::command::build_command;
use crate::{Config, Endpoint, Error, Parameter, Result};

/// Builds, sends and decodes Steam Web API requests.
///
/// The developer key is prepended to every request as the `key` parameter.
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone)]
pub struct WebRequest {
    client: Client,
    config: Config,
    developer_key: Parameter
}

impl WebRequest {
    pub fn new<S: Into<String>>(config: Config, developer_key: S) -> Result<Self> {
        let developer_key = Parameter::developer_key(developer_key);

        if developer_key.value().trim().is_empty() {
            return Err(Error::InvalidCredential);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(WebRequest {
            client: builder.build()?,
            config,
            developer_key
        })
    }

    pub async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        self.fetch_json_with(endpoint, Vec::new()).await
    }

    pub async fn fetch_json_with<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        mut parameters: Vec<Parameter>
    ) -> Result<T> {
        parameters.insert(0, self.developer_key.clone());

        let command = self.command(endpoint, &parameters)?;

        debug!(
            interface = endpoint.interface(),
            method = endpoint.method(),
            version = endpoint.version(),
            params = parameters.len(),
            "steam web api request"
        );

        let response = self.get_text(&command).await?;

        decode(&sanitize_response(&response))
    }

    fn command(&self, endpoint: &Endpoint, parameters: &[Parameter]) -> Result<String> {
        Ok(build_command(self.config.base_url()?, endpoint, parameters))
    }
}

// developer key is redacted so requests can be logged
impl fmt::Debug for WebRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebRequest")
            .field("config", &self.config)
            .field("developer_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl ApiClient for WebRequest {
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }
}

/// Strip newline and tab characters from a response body.
///
/// The API has been seen to embed formatting whitespace inside otherwise
/// valid JSON tokens, this is applied to every response before decoding.
pub fn sanitize_response(body: &str) -> String {
    body.chars()
        .filter(|c| !matches!(c, '\n' | '\t'))
        .collect()
}

/// Decode JSON into `T`, unknown fields are ignored
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}
