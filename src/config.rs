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

use std::time::Duration;

use crate::{env, Error, Result};

pub const STEAM_API_URL: &str = "https://api.steampowered.com";

/// Values supplied by the hosting application.
///
/// The base URL is never defaulted, it is up to the application to manage
/// this value in case the URL changes in the future.
#[derive(Clone, Debug, Default)]
pub struct Config {
    base_url: Option<String>,
    timeout: Option<Duration>
}

impl Config {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Config {
            base_url: Some(base_url.into()),
            timeout: None
        }
    }

    pub fn from_env() -> Self {
        Config {
            base_url: env::get_base_url(),
            timeout: env::get_timeout()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> Result<&str> {
        self.base_url.as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .ok_or(Error::MissingConfiguration)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
