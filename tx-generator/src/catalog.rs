//! Fixed vocabularies the builders draw labels from.

/// Categories cycled through by the pattern builder, indexed by `i % 5`.
pub const PATTERN_CATEGORIES: [&str; 5] = ["Mercado", "Utilidades", "Salario", "Lazer", "Viagem"];

/// Investment types cycled through by the pattern builder. Empty entries mean "no investment".
pub const PATTERN_INVESTMENT_TYPES: [&str; 4] = ["", "Renda Fixa", "Ações", ""];

pub const INCOME_CATEGORIES: [&str; 2] = ["Salário", "Renda Extra"];

/// Category shared by investment income and investment expense rows.
pub const INVESTMENT_CATEGORY: &str = "Investimentos";

pub const INVESTMENT_TYPES: [&str; 4] = [
    "Renda Fixa",
    "Ações",
    "Fundos Imobiliários",
    "Tesouro Direto",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseCategory {
    pub name: &'static str,
    pub descriptions: &'static [&'static str],
}

pub const EXPENSE_CATEGORIES: [ExpenseCategory; 5] = [
    ExpenseCategory {
        name: "Alimentação",
        descriptions: &["Supermercado", "Restaurante", "Padaria", "Delivery"],
    },
    ExpenseCategory {
        name: "Transporte",
        descriptions: &["Combustível", "Uber", "Ônibus", "Estacionamento"],
    },
    ExpenseCategory {
        name: "Moradia",
        descriptions: &["Conta de luz", "Conta de água", "Internet", "Condomínio"],
    },
    ExpenseCategory {
        name: "Lazer",
        descriptions: &["Cinema", "Streaming", "Bar", "Show"],
    },
    ExpenseCategory {
        name: "Saúde",
        descriptions: &["Farmácia", "Consulta médica", "Academia"],
    },
];

#[must_use]
pub fn is_expense_category(name: &str) -> bool {
    EXPENSE_CATEGORIES.iter().any(|category| category.name == name)
}
