//! Command definitions for declarative command metadata.
//!
//! This module declares the grammar the interpreter accepts: each command is
//! an ordered sequence of uppercase words plus an ordered list of positional
//! arguments. The table is pure data; matching and validation live elsewhere.

/// Definition of a positional command argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgDef {
    /// Argument name, as shown in validation messages.
    pub name: &'static str,
    /// Declared semantic type.
    pub arg_type: ArgType,
    /// Whether this argument is required.
    pub required: bool,
}

/// Semantic type of an argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// Plain string value, never fails coercion.
    String,
    /// Integer value.
    Number,
}

impl ArgType {
    /// Returns the type name used in validation messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

/// Identifies which inventory operation a definition maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    AddProduct,
    AddWarehouse,
    Stock,
    Unstock,
    ListProducts,
    ListWarehouses,
    ListWarehouse,
}

/// Definition of a command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Uppercase words identifying the command, e.g. `["ADD", "PRODUCT"]`.
    pub words: &'static [&'static str],
    /// Operation this command dispatches to.
    pub kind: CommandKind,
    /// Short description shown in help.
    pub description: &'static str,
    /// Usage line shown in help.
    pub usage: &'static str,
    /// Positional argument definitions, in order.
    pub args: &'static [ArgDef],
}

impl CommandDef {
    /// Returns the canonical command text (`ADD PRODUCT`).
    pub fn name(&self) -> String {
        self.words.join(" ")
    }
}

const SKU: ArgDef = ArgDef {
    name: "SKU",
    arg_type: ArgType::String,
    required: true,
};

const WAREHOUSE_NUM: ArgDef = ArgDef {
    name: "WAREHOUSE#",
    arg_type: ArgType::Number,
    required: true,
};

const QTY: ArgDef = ArgDef {
    name: "QTY",
    arg_type: ArgType::Number,
    required: true,
};

/// All command definitions.
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        words: &["ADD", "PRODUCT"],
        kind: CommandKind::AddProduct,
        description: "Add a product to the catalog",
        usage: "ADD PRODUCT \"<name>\" <sku>",
        args: &[
            ArgDef {
                name: "PRODUCT NAME",
                arg_type: ArgType::String,
                required: true,
            },
            SKU,
        ],
    },
    CommandDef {
        words: &["ADD", "WAREHOUSE"],
        kind: CommandKind::AddWarehouse,
        description: "Add a warehouse, or change its stock limit",
        usage: "ADD WAREHOUSE <warehouse#> [stock limit]",
        args: &[
            WAREHOUSE_NUM,
            ArgDef {
                name: "STOCK_LIMIT",
                arg_type: ArgType::Number,
                required: false,
            },
        ],
    },
    CommandDef {
        words: &["STOCK"],
        kind: CommandKind::Stock,
        description: "Add units of a product to a warehouse",
        usage: "STOCK <sku> <warehouse#> <qty>",
        args: &[SKU, WAREHOUSE_NUM, QTY],
    },
    CommandDef {
        words: &["UNSTOCK"],
        kind: CommandKind::Unstock,
        description: "Remove units of a product from a warehouse",
        usage: "UNSTOCK <sku> <warehouse#> <qty>",
        args: &[SKU, WAREHOUSE_NUM, QTY],
    },
    CommandDef {
        words: &["LIST", "PRODUCTS"],
        kind: CommandKind::ListProducts,
        description: "List every product in the catalog",
        usage: "LIST PRODUCTS",
        args: &[],
    },
    CommandDef {
        words: &["LIST", "WAREHOUSES"],
        kind: CommandKind::ListWarehouses,
        description: "List every warehouse with its stock limit",
        usage: "LIST WAREHOUSES",
        args: &[],
    },
    CommandDef {
        words: &["LIST", "WAREHOUSE"],
        kind: CommandKind::ListWarehouse,
        description: "List the stock held in one warehouse",
        usage: "LIST WAREHOUSE <warehouse#>",
        args: &[WAREHOUSE_NUM],
    },
];

/// Largest number of words in any command definition.
pub fn max_command_words() -> usize {
    COMMANDS.iter().map(|c| c.words.len()).max().unwrap_or(0)
}

/// Generates the command reference from command definitions.
pub fn generate_help_text() -> String {
    let command_lines = COMMANDS
        .iter()
        .map(|cmd| format!("  {:<42} {}", cmd.usage, cmd.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Commands (command words are case-insensitive):\n{}\n\nQuote names that contain spaces.",
        command_lines
    )
}
