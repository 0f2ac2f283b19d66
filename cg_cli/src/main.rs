mod samples;

use env_logger::Env;
use samples::{find_sample, SAMPLES};
use std::{
    env::{self, ArgsOs},
    ffi::OsString,
    fmt::Display,
    fs,
    io::{self, Write},
    path::PathBuf,
    process,
};

enum Arg {
    Help,
    Version,
    List,
    Sample,
}

fn write_help(w: &mut impl Write) -> io::Result<()> {
    write!(
        w,
        r#"{command} v{version}

使用例:
    {command} list
    {command} sample my_struct
    {command} sample hello -o hello.c

サブコマンド list:
    組み込みのサンプルの名前を表示します。

サブコマンド sample:
    サンプルプログラムの C のコードを生成します。

    凡例:
        {command} sample <NAME> [-o <FILE>]
    引数:
        <NAME>          サンプルの名前
        -o, --out       出力先のファイル (省略時は標準出力)

サブコマンド help:
    ヘルプを表示します。

その他:
    -h, --help      ヘルプを表示する
    -V, --version   バージョンを表示する
    環境変数 RUST_LOG でログの詳細度を指定できます。"#,
        command = env!("CARGO_PKG_NAME"),
        version = get_version()
    )
}

fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

fn emit_error(err: &dyn Display) {
    log::error!("{}", err);
    eprintln!("error: {}", err);
}

fn exit_with_help() -> ! {
    let mut stdout = io::stdout();
    write_help(&mut stdout).ok();
    process::exit(1)
}

fn exit_with_version() -> ! {
    println!("{}", get_version());
    process::exit(0)
}

fn parse_args_for_subcommand(args: &mut impl Iterator<Item = OsString>) -> Result<Arg, ()> {
    let subcommand = match args.next() {
        None => return Ok(Arg::Help),
        Some(x) => x,
    };

    match subcommand.to_string_lossy().as_ref() {
        "-h" | "--help" | "help" => Ok(Arg::Help),
        "-V" | "--version" | "version" => Ok(Arg::Version),
        "list" => Ok(Arg::List),
        "sample" => Ok(Arg::Sample),
        subcommand => {
            eprintln!("Unknown subcommand '{}'.", subcommand);
            Err(())
        }
    }
}

fn init_log() {
    let env = Env::default().default_filter_or("warn");
    env_logger::from_env(env).init();
}

fn write_output(output_path_opt: Option<PathBuf>, text: &str) -> Result<(), ()> {
    match output_path_opt {
        Some(path) => fs::write(&path, text).map_err(|err| {
            emit_error(&format!("{} ({})", err, path.to_string_lossy()));
        }),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

fn exec_sample_cmd(args: &mut impl Iterator<Item = OsString>) -> Result<(), ()> {
    let mut name_opt = None;
    // or stdout
    let mut output_path_opt = None;

    while let Some(arg) = args.next() {
        match arg.to_string_lossy().as_ref() {
            "-o" | "--out" => match args.next() {
                Some(path) => output_path_opt = Some(PathBuf::from(path)),
                None => {
                    emit_error(&"-o/--out の後にファイル名がありません。");
                    return Err(());
                }
            },
            name if name_opt.is_none() => name_opt = Some(name.to_string()),
            extra => {
                emit_error(&format!("余分な引数があります: '{}'", extra));
                return Err(());
            }
        }
    }

    let name = match name_opt {
        Some(name) => name,
        None => {
            emit_error(&"サンプルの名前を指定してください。");
            return Err(());
        }
    };

    let sample = match find_sample(&name) {
        Some(sample) => sample,
        None => {
            emit_error(&format!("サンプル '{}' はありません。", name));
            return Err(());
        }
    };

    log::debug!("rendering sample '{}'", sample.name);
    let text = sample.render().map_err(|err| emit_error(&err))?;
    write_output(output_path_opt, &text)
}

fn execute_with_args(mut args: ArgsOs) -> Result<(), ()> {
    args.next();

    match parse_args_for_subcommand(&mut args)? {
        Arg::Help => exit_with_help(),
        Arg::Version => exit_with_version(),
        Arg::List => {
            for sample in SAMPLES {
                println!("{:<12}{}", sample.name, sample.summary);
            }
            Ok(())
        }
        Arg::Sample => exec_sample_cmd(&mut args),
    }
}

fn main() {
    init_log();

    match execute_with_args(env::args_os()) {
        Ok(()) => {}
        Err(()) => process::exit(1),
    }
}
