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

/// Identifies one remote method, i.e. `ISteamUser/GetPlayerSummaries/v2`.
///
/// Endpoints are meant to be declared as constants by the method wrappers,
/// which turns an empty name or zero version into a compile error:
///
/// ```
/// use steamweb::Endpoint;
///
/// const GET_SUPPORTED_API_LIST: Endpoint =
///     Endpoint::new("ISteamWebAPIUtil", "GetSupportedAPIList", 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    interface: &'static str,
    method: &'static str,
    version: u32
}

impl Endpoint {
    pub const fn new(interface: &'static str, method: &'static str, version: u32) -> Self {
        assert!(!interface.is_empty(), "interface name cannot be empty");
        assert!(!method.is_empty(), "method name cannot be empty");
        assert!(version > 0, "method version must be greater than zero");

        Endpoint { interface, method, version }
    }

    pub fn interface(&self) -> &'static str {
        self.interface
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::Endpoint;

    const PLAYER_SUMMARIES: Endpoint = Endpoint::new("ISteamUser", "GetPlayerSummaries", 2);

    #[test]
    fn const_endpoint() {
        assert_eq!(PLAYER_SUMMARIES.interface(), "ISteamUser");
        assert_eq!(PLAYER_SUMMARIES.method(), "GetPlayerSummaries");
        assert_eq!(PLAYER_SUMMARIES.version(), 2);
    }

    #[test]
    #[should_panic(expected = "method version must be greater than zero")]
    fn zero_version() {
        let version = std::hint::black_box(0);
        Endpoint::new("ISteamUser", "GetPlayerSummaries", version);
    }

    #[test]
    #[should_panic(expected = "interface name cannot be empty")]
    fn empty_interface() {
        let interface = std::hint::black_box("");
        Endpoint::new(interface, "GetPlayerSummaries", 1);
    }

    #[test]
    #[should_panic(expected = "method name cannot be empty")]
    fn empty_method() {
        let method = std::hint::black_box("");
        Endpoint::new("ISteamUser", method, 1);
    }
}
