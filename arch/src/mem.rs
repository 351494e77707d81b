//! Memory map and predefined symbols.

/// Base of the memory-mapped screen.
pub const SCREEN: u16 = 0x4000;

/// Memory-mapped keyboard register.
pub const KBD: u16 = 0x6000;

/// First RAM address handed out to variables.
pub const VAR_BASE: u16 = 16;

/// Largest value an address-load word can carry; the top bit marks compute words.
pub const ADDR_MAX: u16 = 0x7FFF;

pub const PREDEFINED: [(&str, u16); 23] = [
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SCREEN", SCREEN),
    ("KBD", KBD),
];
