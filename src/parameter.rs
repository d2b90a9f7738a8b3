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

/// Name of the query parameter carrying the developer key
pub const DEVELOPER_KEY_PARAM: &str = "key";

/// A single `name=value` query parameter
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    value: String
}

impl Parameter {
    pub fn new<N, V>(name: N, value: V) -> Self
        where N: Into<String>, V: Into<String>
    {
        Parameter { name: name.into(), value: value.into() }
    }

    pub fn developer_key<V: Into<String>>(value: V) -> Self {
        Self::new(DEVELOPER_KEY_PARAM, value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<N, V> From<(N, V)> for Parameter
    where N: Into<String>, V: Into<String>
{
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn developer_key_name() {
        let key = Parameter::developer_key("ABC123");
        assert_eq!(key.name(), "key");
        assert_eq!(key.value(), "ABC123");
    }

    #[test]
    fn from_tuple() {
        let param: Parameter = ("steamid", "76561197960435530").into();
        assert_eq!(param, Parameter::new("steamid", "76561197960435530"));
    }
}
