use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cod,
    BankTransfer,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "COD",
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Thanh toán khi nhận hàng",
            PaymentMethod::BankTransfer => "Chuyển khoản ngân hàng",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cash",
            PaymentMethod::BankTransfer => "bank",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "bg-warning-subtle text-warning",
            PaymentMethod::BankTransfer => "bg-info-subtle text-info",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![PaymentMethod::Cod, PaymentMethod::BankTransfer]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "COD" => Some(PaymentMethod::Cod),
            "BANK_TRANSFER" => Some(PaymentMethod::BankTransfer),
            _ => None,
        }
    }
}
