/// Built-in languages: (identifier, sloccount code used by the sources API, suffixes).
pub const BUILTIN_LANGUAGES: &[(&str, &str, &[&str])] = &[
    ("ada", "ada", &[".ada", ".adb", ".ads"]),
    ("asm", "asm", &[".s", ".asm"]),
    ("c", "ansic", &[".c", ".h"]),
    (
        "cpp",
        "cpp",
        &[".cc", ".cpp", ".cxx", ".c++", ".h", ".hh", ".hpp", ".hxx", ".h++"],
    ),
    ("csharp", "cs", &[".cs"]),
    ("erlang", "erlang", &[".erl", ".hrl"]),
    ("fortran", "fortran", &[".f", ".for", ".f77"]),
    ("fortran90", "f90", &[".f90", ".f95", ".f03"]),
    ("haskell", "haskell", &[".hs", ".lhs"]),
    ("java", "java", &[".java"]),
    ("lisp", "lisp", &[".lisp", ".lsp", ".cl", ".el", ".scm"]),
    ("objc", "objc", &[".m"]),
    ("ocaml", "ml", &[".ml", ".mli"]),
    ("pascal", "pascal", &[".p", ".pas", ".pp"]),
    ("perl", "perl", &[".pl", ".pm"]),
    ("php", "php", &[".php", ".inc"]),
    ("python", "python", &[".py"]),
    ("ruby", "ruby", &[".rb"]),
    ("shell", "sh", &[".sh", ".bash"]),
    ("tcl", "tcl", &[".tcl", ".tk"]),
];
