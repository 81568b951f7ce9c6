//! Built in language definitions.
//!
//! These mirror the keyword tables a web highlighter ships with, split into
//! the following buckets:
//!
//! built_in - standard library functions and objects
//! type - primitive and standard type names
//! keyword - reserved words of the language
//! literal - constant values e.g. true or nullptr
//!
//! Register them all at once with [`Registry::with_builtins`](crate::Registry::with_builtins),
//! or pick individual ones and register them yourself.

use crate::{Bucket, Error, Keywords};
use regex::Regex;

/// A language definition, keyed by its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDef {
    /// Name of the language, e.g. "cpp"
    pub name: String,
    /// Other identifiers this language can be looked up by
    pub aliases: Vec<String>,
    /// The keyword table
    pub keywords: Keywords,
}

impl LanguageDef {
    /// Creates a new definition with every bucket present and empty
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), aliases: vec![], keywords: Keywords::new() }
    }

    /// Adds lookup aliases to this definition
    #[must_use]
    pub fn alias(mut self, aliases: &[&str]) -> Self {
        self.aliases.extend(aliases.iter().map(|a| a.to_string()));
        self
    }

    /// Replaces the keyword table of this definition
    #[must_use]
    pub fn keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }

    /// Compiles a pattern for every non-empty bucket, in [`Bucket::ALL`] order
    pub fn patterns(&self) -> Result<Vec<(Bucket, Regex)>, Error> {
        let mut result = vec![];
        for bucket in Bucket::ALL {
            if let Some(re) = self.keywords.pattern(bucket)? {
                result.push((bucket, re));
            }
        }
        Ok(result)
    }
}

/// Obtain the C++ language definition
#[must_use]
pub fn cpp() -> LanguageDef {
    let keywords = Keywords::new()
        .with(Bucket::Type, &[
            "bool", "char", "char16_t", "char32_t", "char8_t", "double", "float",
            "int", "long", "short", "void", "wchar_t", "unsigned", "signed",
            "const", "static",
        ])
        .with(Bucket::Keyword, &[
            "alignas", "alignof", "and", "and_eq", "asm", "atomic_cancel",
            "atomic_commit", "atomic_noexcept", "auto", "bitand", "bitor", "break",
            "case", "catch", "class", "co_await", "co_return", "co_yield", "compl",
            "concept", "const_cast", "consteval", "constexpr", "constinit",
            "continue", "decltype", "default", "delete", "do", "dynamic_cast",
            "else", "enum", "explicit", "export", "extern", "final", "for",
            "friend", "goto", "if", "import", "inline", "module", "mutable",
            "namespace", "new", "noexcept", "not", "not_eq", "operator", "or",
            "or_eq", "override", "private", "protected", "public", "reflexpr",
            "register", "reinterpret_cast", "requires", "return", "sizeof",
            "static_assert", "static_cast", "struct", "switch", "synchronized",
            "template", "this", "thread_local", "throw", "transaction_safe",
            "transaction_safe_dynamic", "try", "typedef", "typeid", "typename",
            "union", "using", "virtual", "volatile", "while", "xor", "xor_eq",
        ])
        .with(Bucket::Literal, &["NULL", "false", "nullopt", "nullptr", "true"])
        .with(Bucket::BuiltIn, &[
            "_Pragma", "abort", "abs", "acos", "apply", "as_const", "asin",
            "atan", "atan2", "calloc", "ceil", "cerr", "cin", "clog", "cos",
            "cosh", "cout", "declval", "endl", "exchange", "exit", "exp", "fabs",
            "floor", "fmod", "forward", "fprintf", "fputs", "free", "frexp",
            "fscanf", "future", "invoke", "isalnum", "isalpha", "iscntrl",
            "isdigit", "isgraph", "islower", "isprint", "ispunct", "isspace",
            "isupper", "isxdigit", "labs", "launder", "ldexp", "log", "log10",
            "make_pair", "make_shared", "make_shared_for_overwrite", "make_tuple",
            "make_unique", "malloc", "memchr", "memcmp", "memcpy", "memset",
            "modf", "move", "pow", "printf", "putchar", "puts", "realloc",
            "scanf", "sin", "sinh", "snprintf", "sprintf", "sqrt", "sscanf",
            "std", "stderr", "stdin", "stdout", "strcat", "strchr", "strcmp",
            "strcpy", "strcspn", "strlen", "strncat", "strncmp", "strncpy",
            "strpbrk", "strrchr", "strspn", "strstr", "swap", "tan", "tanh",
            "terminate", "to_underlying", "tolower", "toupper", "vfprintf",
            "visit", "vprintf", "vsprintf",
        ]);
    LanguageDef::new("cpp")
        .alias(&["cc", "c++", "h++", "hpp", "hh", "hxx", "cxx"])
        .keywords(keywords)
}

/// Obtain the C language definition
#[must_use]
pub fn c() -> LanguageDef {
    let keywords = Keywords::new()
        .with(Bucket::Type, &[
            "float", "double", "signed", "unsigned", "int", "short", "long",
            "char", "void", "_Bool", "_Complex", "_Imaginary", "_Decimal32",
            "_Decimal64", "_Decimal128", "const", "static", "complex", "bool",
            "imaginary",
        ])
        .with(Bucket::Keyword, &[
            "asm", "auto", "break", "case", "continue", "default", "do", "else",
            "enum", "extern", "for", "fortran", "goto", "if", "inline",
            "register", "restrict", "return", "sizeof", "struct", "switch",
            "typedef", "union", "volatile", "while", "_Alignas", "_Alignof",
            "_Atomic", "_Generic", "_Noreturn", "_Static_assert",
            "_Thread_local", "alignas", "alignof", "noreturn", "static_assert",
            "thread_local", "_Pragma",
        ])
        .with(Bucket::Literal, &["true", "false", "NULL"])
        .with(Bucket::BuiltIn, &[
            "std", "string", "wstring", "cin", "cout", "cerr", "clog", "stdin",
            "stdout", "stderr", "stringstream", "istringstream",
            "ostringstream", "auto_ptr", "deque", "list", "queue", "stack",
            "vector", "map", "set", "pair", "bitset", "multiset", "multimap",
            "unordered_set", "unordered_map", "unordered_multiset",
            "unordered_multimap", "priority_queue", "make_pair", "array",
            "shared_ptr", "abort", "terminate", "abs", "acos", "asin", "atan2",
            "atan", "calloc", "ceil", "cosh", "cos", "exit", "exp", "fabs",
            "floor", "fmod", "fprintf", "fputs", "free", "frexp", "fscanf",
            "future", "isalnum", "isalpha", "iscntrl", "isdigit", "isgraph",
            "islower", "isprint", "ispunct", "isspace", "isupper", "isxdigit",
            "tolower", "toupper", "labs", "ldexp", "log10", "log", "malloc",
            "realloc", "memchr", "memcmp", "memcpy", "memset", "modf", "pow",
            "printf", "putchar", "puts", "scanf", "sinh", "sin", "snprintf",
            "sprintf", "sqrt", "sscanf", "strcat", "strchr", "strcmp", "strcpy",
            "strcspn", "strlen", "strncat", "strncmp", "strncpy", "strpbrk",
            "strrchr", "strspn", "strstr", "tanh", "tan", "vfprintf", "vprintf",
            "vsprintf", "endl", "initializer_list", "unique_ptr",
        ]);
    LanguageDef::new("c").alias(&["h"]).keywords(keywords)
}

/// Obtain the rust language definition
#[must_use]
pub fn rust() -> LanguageDef {
    let keywords = Keywords::new()
        .with(Bucket::Type, &[
            "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64",
            "u128", "usize", "f32", "f64", "str", "char", "bool", "Box", "Option",
            "Result", "String", "Vec",
        ])
        .with(Bucket::Keyword, &[
            "abstract", "as", "async", "await", "become", "box", "break", "const",
            "continue", "crate", "do", "dyn", "else", "enum", "extern", "false",
            "final", "fn", "for", "if", "impl", "in", "let", "loop", "macro",
            "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
            "return", "self", "Self", "static", "struct", "super", "trait",
            "true", "try", "type", "typeof", "unsafe", "unsized", "use",
            "virtual", "where", "while", "yield",
        ])
        .with(Bucket::Literal, &["true", "false", "Some", "None", "Ok", "Err"])
        .with(Bucket::BuiltIn, &[
            "drop", "Copy", "Send", "Sized", "Sync", "Drop", "Fn", "FnMut",
            "FnOnce", "ToOwned", "Clone", "Debug", "PartialEq", "PartialOrd",
            "Eq", "Ord", "AsRef", "AsMut", "Into", "From", "Default", "Iterator",
            "Extend", "IntoIterator", "DoubleEndedIterator", "ExactSizeIterator",
            "SliceConcatExt", "ToString", "assert!", "assert_eq!", "bitflags!",
            "bytes!", "cfg!", "col!", "concat!", "concat_idents!",
            "debug_assert!", "debug_assert_eq!", "env!", "eprintln!", "panic!",
            "file!", "format!", "format_args!", "include_bytes!", "include_str!",
            "line!", "local_data_key!", "module_path!", "option_env!", "print!",
            "println!", "select!", "stringify!", "try!", "unimplemented!",
            "unreachable!", "vec!", "write!", "writeln!", "macro_rules!",
            "assert_ne!", "debug_assert_ne!",
        ]);
    LanguageDef::new("rust").alias(&["rs"]).keywords(keywords)
}

/// Every built in language definition
#[must_use]
pub fn all() -> Vec<LanguageDef> {
    vec![cpp(), c(), rust()]
}
