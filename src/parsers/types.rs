use chrono::NaiveDate;
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Formato de data aceito pelos extratos: dia primeiro (`dd/MM/yyyy`).
pub const STATEMENT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Representa uma data extraída de um extrato (CSV ou QIF), ainda como texto.
///
/// Só o formato com dia primeiro é aceito:
/// - DD/MM/YYYY
///
/// Uma data que não segue esse formato vira `None` (marcador de data inválida),
/// nunca uma tentativa de adivinhar outro formato.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementDate(String);

impl StatementDate {
    /// Converte o texto para `NaiveDate`, ou `None` se não for uma data válida
    pub fn parse(&self) -> Option<NaiveDate> {
        let s = self.0.trim();
        if s.is_empty() {
            return None;
        }

        NaiveDate::parse_from_str(s, STATEMENT_DATE_FORMAT).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StatementDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StatementDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Valor monetário ainda em texto, como veio do arquivo.
///
/// Campos vazios ou ilegíveis valem zero: o extrato é importado no melhor
/// esforço em vez de ser rejeitado inteiro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementAmount(String);

impl StatementAmount {
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Magnitude (sempre não negativa) do valor, ou `None` se ilegível
    pub fn parse(&self) -> Option<Decimal> {
        let cleaned: String = self.0.trim().chars().filter(|c| *c != ',').collect();
        if cleaned.is_empty() {
            return Some(Decimal::zero());
        }

        Decimal::from_str(&cleaned)
            .or_else(|_| Decimal::from_scientific(&cleaned))
            .ok()
            .map(|amount| amount.abs())
    }

    /// Como `parse`, mas valores ilegíveis viram zero
    pub fn parse_or_zero(&self) -> Decimal {
        self.parse().unwrap_or_else(|| {
            tracing::debug!(amount = %self.0, "unreadable amount, defaulting to zero");
            Decimal::zero()
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StatementAmount {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<String> for StatementAmount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StatementAmount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// -----------------------------------------------------------------------------
// Testes
// -----------------------------------------------------------------------------
