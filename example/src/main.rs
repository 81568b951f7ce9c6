use highlight_keywords::{Bucket, Config, LanguageRegistry, Registry};
use lliw::Fg;

pub static MANIFEST: &str = r#"
[[augment]]
functions = ["lerp", "clamp", "saturate"]
types = ["vec2", "vec3", "mat4"]
names = ["uniform", "varying"]

[[augment]]
language = "c"
types = ["size_t", "ptrdiff_t"]
promote_to_literals = true
"#;

pub static CODE: &str = "\
uniform vec3 light = clamp(normalize(dir), 0.0, 1.0);
if (light.x > 0.5) { return lerp(a, b, t); }
static const mat4 identity = mat4(1.0);
";

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .try_init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(std::path::Path::new(&path)),
        None => Config::from_toml(MANIFEST),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let mut aug = config.augmenter(Registry::with_builtins());
    if let Err(err) = config.apply(&mut aug) {
        eprintln!("{err}");
        std::process::exit(1);
    }
    let registry = aug.into_inner();

    for name in registry.languages() {
        let Some(def) = registry.get(name) else { continue };
        println!("{name}");
        for bucket in Bucket::ALL {
            let count = def.keywords.bucket(bucket).map_or(0, Vec::len);
            println!("  {}{: <9}{} {count}", colour(bucket), bucket.name(), Fg::Reset);
        }
    }

    // Show what a highlighting pass over C++ would pick up
    let Some(cpp) = registry.get("cpp") else { return };
    let patterns = match cpp.patterns() {
        Ok(patterns) => patterns,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    println!();
    for (y, line) in CODE.lines().enumerate() {
        print!("{: <3} |", y);
        for (bucket, re) in &patterns {
            for m in re.find_iter(line) {
                print!(" {}{}{}", colour(*bucket), m.as_str(), Fg::Reset);
            }
        }
        println!();
    }
}

fn colour(bucket: Bucket) -> Fg {
    match bucket {
        Bucket::BuiltIn => Fg::Rgb(174, 115, 19),
        Bucket::Type => Fg::Rgb(165, 152, 13),
        Bucket::Keyword => Fg::Rgb(91, 157, 72),
        Bucket::Literal => Fg::Rgb(54, 161, 102),
    }
}
