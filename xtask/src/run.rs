use duct::cmd;

pub fn run_menu(release: bool, args: &[String]) -> anyhow::Result<()> {
    let mut run_args = vec!["run", "--bin", "isomenu-ratatui"];

    if release {
        run_args.extend(["--profile", "release-lto"]);
    }

    run_args.push("--");
    run_args.extend(args.iter().map(String::as_str));

    if let Err(e) = cmd("cargo", run_args).run() {
        println!("hint: the menu needs an interactive terminal on both stdin and stdout");
        return Err(e.into());
    }
    Ok(())
}
