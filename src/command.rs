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

use url::form_urlencoded::byte_serialize;

use crate::{Endpoint, Parameter};

/// Takes values and returns a command string that can be sent to the Steam Web API.
///
/// Example: `https://api.steampowered.com/ISteamWebAPIUtil/GetSupportedAPIList/v1/?key=ABC123`
///
/// Parameters are appended in list order. Names are written verbatim, values
/// are form encoded so that `&`, `?` or `#` in a value can't corrupt the
/// query string.
pub fn build_command(base_url: &str, endpoint: &Endpoint, parameters: &[Parameter]) -> String {
    let mut command = format!(
        "{base_url}/{interface}/{method}/v{version}/",
        interface = endpoint.interface(),
        method = endpoint.method(),
        version = endpoint.version()
    );

    for (i, param) in parameters.iter().enumerate() {
        command.push(if i == 0 { '?' } else { '&' });
        command.push_str(param.name());
        command.push('=');
        command.extend(byte_serialize(param.value().as_bytes()));
    }

    command
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUPPORTED_API_LIST: Endpoint = Endpoint::new("ISteamWebAPIUtil", "GetSupportedAPIList", 1);

    #[test]
    fn developer_key_only() {
        let command = build_command(
            "https://api.steampowered.com",
            &SUPPORTED_API_LIST,
            &[Parameter::developer_key("ABC123")]
        );

        assert_eq!(command, "https://api.steampowered.com/ISteamWebAPIUtil/GetSupportedAPIList/v1/?key=ABC123");
    }

    #[test]
    fn parameters_in_order() {
        let endpoint = Endpoint::new("ISteamUser", "GetFriendList", 1);
        let command = build_command(
            "http://localhost",
            &endpoint,
            &[
                Parameter::developer_key("ABC123"),
                Parameter::new("steamid", "76561197960435530"),
                Parameter::new("relationship", "friend")
            ]
        );

        assert_eq!(
            command,
            "http://localhost/ISteamUser/GetFriendList/v1/?key=ABC123&steamid=76561197960435530&relationship=friend"
        );
    }

    #[test]
    fn no_parameters() {
        let command = build_command("http://localhost", &SUPPORTED_API_LIST, &[]);
        assert_eq!(command, "http://localhost/ISteamWebAPIUtil/GetSupportedAPIList/v1/");
    }

    #[test]
    fn indexed_names_verbatim() {
        let endpoint = Endpoint::new("IPublishedFileService", "GetDetails", 1);
        let command = build_command(
            "http://localhost",
            &endpoint,
            &[
                Parameter::developer_key("ABC123"),
                Parameter::new("publishedfileids[0]", "123")
            ]
        );

        assert_eq!(
            command,
            "http://localhost/IPublishedFileService/GetDetails/v1/?key=ABC123&publishedfileids[0]=123"
        );
    }

    #[test]
    fn reserved_characters_encoded() {
        let command = build_command(
            "http://localhost",
            &SUPPORTED_API_LIST,
            &[
                Parameter::developer_key("ABC123"),
                Parameter::new("filter", "a&b?c#d e")
            ]
        );

        assert_eq!(
            command,
            "http://localhost/ISteamWebAPIUtil/GetSupportedAPIList/v1/?key=ABC123&filter=a%26b%3Fc%23d+e"
        );
    }
}
