/*
 *  Copyright (C) 2025  Markus Elias Gerber
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use log::warn;
use mmu_sim::LogicalAddress;

/// Reads decimal integers separated by whitespace, the way `scanf("%d")` would.
///
/// Iteration ends at the end of the input or at the first position that does
/// not start with a decimal integer. `12abc` therefore yields `12` and stops.
pub struct AddressTokens<'a> {
    input: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> AddressTokens<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            done: false,
        }
    }

    fn stop(&mut self, reason: &str) -> Option<LogicalAddress> {
        self.done = true;
        if self.pos < self.input.len() {
            warn!("Stopped reading addresses at byte {}: {}", self.pos, reason);
        }
        None
    }
}

impl Iterator for AddressTokens<'_> {
    type Item = LogicalAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while self.pos < self.input.len() && self.input[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }

        let rest = &self.input[self.pos..];
        let sign_len = match rest.first() {
            Some(b'-') | Some(b'+') => 1,
            _ => 0,
        };
        let digit_len = rest[sign_len..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();

        if digit_len == 0 {
            return self.stop("not a decimal integer");
        }

        let token_len = sign_len + digit_len;
        // only ascii sign and digits, so this is valid utf-8
        let parsed = std::str::from_utf8(&rest[..token_len])
            .ok()
            .and_then(|token| token.parse::<i32>().ok());

        match parsed {
            Some(value) => {
                self.pos += token_len;
                Some(LogicalAddress::new(value))
            }
            None => self.stop("integer out of range"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::AddressTokens;

    fn parse(input: &str) -> Vec<i32> {
        AddressTokens::new(input.as_bytes())
            .map(|address| address.raw())
            .collect()
    }

    #[test]
    fn test_one_address_per_line() {
        assert_eq!(parse("16916\n62493\n30198\n"), vec![16916, 62493, 30198]);
        assert_eq!(parse("1\r\n2\r\n3"), vec![1, 2, 3]);
    }

    #[test]
    fn test_any_whitespace_separates() {
        assert_eq!(parse("  1 2\t3\n\n  4 "), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Vec::<i32>::new());
        assert_eq!(parse(" \n\t "), Vec::<i32>::new());
    }

    #[test]
    fn test_stops_at_non_numeric_token() {
        assert_eq!(parse("10\nend\n20\n"), vec![10]);
        assert_eq!(parse("x 1 2"), Vec::<i32>::new());
    }

    #[test]
    fn test_numeric_prefix_is_consumed() {
        assert_eq!(parse("12abc 13"), vec![12]);
        assert_eq!(parse("5-6"), vec![5, -6]);
    }

    #[test]
    fn test_signs() {
        assert_eq!(parse("-1 +2"), vec![-1, 2]);
        assert_eq!(parse("3 - 4"), vec![3]);
    }

    #[test]
    fn test_stops_on_overflow() {
        assert_eq!(parse("1 2147483647 2147483648 3"), vec![1, 2147483647]);
    }

    #[test]
    fn test_fused_after_stop() {
        let mut tokens = AddressTokens::new(b"1 x 2");
        assert_eq!(tokens.next().map(|a| a.raw()), Some(1));
        assert!(tokens.next().is_none());
        assert!(tokens.next().is_none());
    }
}
