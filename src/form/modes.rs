/// What a mode's assembled body describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    ProductEntry,
    Product,
    Shop,
}

/// One positional field in an entry mode.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub label: &'static str,
    pub required: bool,
    /// When set, a present value must parse as a number greater than zero.
    pub positive_number: bool,
    pub suggestions: &'static [&'static str],
}

/// An entry mode: an ordered field layout for one kind of record.
#[derive(Debug, Clone, Copy)]
pub struct Mode {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ModeKind,
    pub fields: &'static [FieldSpec],
}

pub const MODES: &[Mode] = &[
    Mode {
        key: "product-entry",
        label: "Product Entry",
        kind: ModeKind::ProductEntry,
        fields: &[
            FieldSpec {
                label: "Product Name",
                required: true,
                positive_number: false,
                suggestions: &["banana", "bread", "butter", "beans"],
            },
            FieldSpec {
                label: "Price",
                required: true,
                positive_number: true,
                suggestions: &[],
            },
            FieldSpec {
                label: "Product Volume",
                required: false,
                positive_number: true,
                suggestions: &[],
            },
            FieldSpec {
                label: "Unit",
                required: true,
                positive_number: false,
                suggestions: &["kg", "l", "ks"],
            },
            FieldSpec {
                label: "Shop Name",
                required: true,
                positive_number: false,
                suggestions: &["tesco", "lidl", "albert", "billa"],
            },
            FieldSpec {
                label: "Date",
                required: false,
                positive_number: false,
                suggestions: &[],
            },
            FieldSpec {
                label: "Notes",
                required: false,
                positive_number: false,
                suggestions: &[],
            },
        ],
    },
    Mode {
        key: "product",
        label: "Product",
        kind: ModeKind::Product,
        fields: &[
            FieldSpec {
                label: "Name",
                required: true,
                positive_number: false,
                suggestions: &["banana", "bread", "butter", "beans"],
            },
            FieldSpec {
                label: "Notes",
                required: false,
                positive_number: false,
                suggestions: &[],
            },
            FieldSpec {
                label: "Tags",
                required: false,
                positive_number: false,
                suggestions: &[],
            },
        ],
    },
    Mode {
        key: "shop",
        label: "Shop",
        kind: ModeKind::Shop,
        fields: &[
            FieldSpec {
                label: "Name",
                required: true,
                positive_number: false,
                suggestions: &["tesco", "lidl", "albert", "billa"],
            },
            FieldSpec {
                label: "Notes",
                required: false,
                positive_number: false,
                suggestions: &[],
            },
        ],
    },
];

/// Look up a mode by its key.
pub fn find_mode(key: &str) -> Option<&'static Mode> {
    MODES.iter().find(|m| m.key == key)
}
