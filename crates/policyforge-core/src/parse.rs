//! Compact textual forms for condition rows.
//!
//! The CLI accepts rows as short whitespace-separated strings. Structural
//! tokens (fields, operators, quantifiers) must be exact; the value is the
//! remainder of the line after one separating space, kept as written, and
//! may be empty.
//!
//! | Row                  | Form                                                    |
//! |----------------------|---------------------------------------------------------|
//! | Ethereum             | `<field> <op> [value]`                                  |
//! | Solana transfer      | `<transfers\|spl_transfers> <all\|any\|count[:N]> <field> <op> [value]` |
//! | Solana instruction   | `program_key <all\|any> <op> [value]` or `count <op> <value>` |
//! | Count clause         | `<op> <n>`                                              |
//! | Tron                 | `contract <Type>` or `<field> <op> [value]`            |
//! | Activity             | `<type\|resource> <==\|!=> [value]`                    |
//!
//! # Examples
//!
//! ```
//! use policyforge_core::types::{EthereumCondition, EthereumField, EthereumOperator};
//!
//! let row: EthereumCondition = "value <= 1000000000000000000".parse().unwrap();
//! assert_eq!(row.field, EthereumField::Value);
//! assert_eq!(row.operator, EthereumOperator::Le);
//! assert_eq!(row.value, "1000000000000000000");
//! ```

use std::str::FromStr;

use crate::error::{ParseError, ParseResult};
use crate::types::{
    ActivityCondition, CountClause, EthereumCondition, SolanaCondition,
    SolanaInstructionCondition, SolanaQuantifier, SolanaTransferCondition, TronCondition,
};

/// Cursor over the whitespace-separated tokens of one row.
struct Tokens<'a> {
    rest: &'a str,
    kind: &'static str,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str, kind: &'static str) -> Self {
        Self {
            rest: input.trim_start(),
            kind,
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let rest = self.rest.trim_start();
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        self.rest = tail;
        Some(token)
    }

    fn expect(&mut self, expected: &str) -> ParseResult<&'a str> {
        self.next_token()
            .ok_or_else(|| ParseError::missing_token(self.kind, expected))
    }

    fn parse<T>(&mut self, expected: &str) -> ParseResult<T>
    where
        T: FromStr<Err = ParseError>,
    {
        self.expect(expected)?.parse()
    }

    fn number<T: FromStr>(&mut self, expected: &str) -> ParseResult<T> {
        let token = self.expect(expected)?;
        token
            .parse()
            .map_err(|_| ParseError::invalid_number(self.kind, token))
    }

    /// Everything after the separator that follows the last structural token.
    fn value(self) -> String {
        let mut chars = self.rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => chars.as_str().to_string(),
            _ => self.rest.to_string(),
        }
    }

    fn finish(self) -> ParseResult<()> {
        let rest = self.rest.trim();
        if rest.is_empty() {
            Ok(())
        } else {
            Err(ParseError::unknown_token(self.kind, rest))
        }
    }
}

impl FromStr for EthereumCondition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(s, "ethereum row");
        let field = tokens.parse("field")?;
        let operator = tokens.parse("operator")?;
        Ok(Self {
            field,
            operator,
            value: tokens.value(),
        })
    }
}

impl FromStr for SolanaTransferCondition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(s, "solana transfer row");
        let kind = tokens.parse("transfer type")?;

        let quantifier_token = tokens.expect("quantifier")?;
        let (quantifier, count_value) = match quantifier_token.strip_prefix("count:") {
            Some(n) => {
                let count = n
                    .parse()
                    .map_err(|_| ParseError::invalid_number("solana transfer count", n))?;
                (SolanaQuantifier::Count, Some(count))
            }
            None => (quantifier_token.parse()?, None),
        };

        let field = tokens.parse("field")?;
        let operator = tokens.parse("operator")?;
        Ok(Self {
            kind,
            quantifier,
            field,
            operator,
            value: tokens.value(),
            count_value,
        })
    }
}

impl FromStr for SolanaInstructionCondition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(s, "solana instruction row");
        match tokens.expect("instruction field")? {
            "program_key" => {
                let quantifier = tokens.parse("quantifier")?;
                let operator = tokens.parse("operator")?;
                Ok(Self::ProgramKey {
                    quantifier,
                    operator,
                    value: tokens.value(),
                })
            }
            "count" => {
                let operator = tokens.parse("operator")?;
                Ok(Self::Count {
                    operator,
                    value: tokens.value(),
                })
            }
            other => Err(ParseError::unknown_token("instruction field", other)),
        }
    }
}

impl FromStr for SolanaCondition {
    type Err = ParseError;

    /// Instruction rows start with `program_key` or `count`; anything else is
    /// read as a transfer row.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = s.split_whitespace().next().unwrap_or_default();
        if matches!(first, "program_key" | "count") {
            s.parse().map(Self::Instruction)
        } else {
            s.parse().map(Self::Transfer)
        }
    }
}

impl FromStr for CountClause {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(s, "count clause");
        let operator = tokens.parse("operator")?;
        let value = tokens.number("count")?;
        tokens.finish()?;
        Ok(Self { operator, value })
    }
}

impl FromStr for TronCondition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(s, "tron row");
        let first = tokens.expect("field")?;
        if first == "contract" {
            let contract_type = tokens.parse("contract type")?;
            tokens.finish()?;
            return Ok(Self::contract(contract_type));
        }

        let field = first.parse()?;
        let operator = tokens.parse("operator")?;
        Ok(Self::field(field, operator, tokens.value()))
    }
}

impl FromStr for ActivityCondition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(s, "activity row");
        let field = tokens.parse("field")?;
        let operator = tokens.parse("operator")?;
        Ok(Self {
            field,
            operator,
            value: tokens.value(),
        })
    }
}
