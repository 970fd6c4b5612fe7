//! CLI argument parsing

use crate::cli::output::{IndentStyle, RenderOptions};
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    Flat(FlatArgs),
    Tree(TreeArgs),
}

#[derive(Debug, Clone)]
pub struct FlatArgs {
    pub path: String,
    pub render: RenderOptions,
    pub output: Option<String>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct TreeArgs {
    pub path: String,
    /// Enumeration depth bound; `None` means unbounded
    pub levels: Option<u32>,
    pub render: RenderOptions,
    pub output: Option<String>,
    pub quiet: bool,
}

impl Default for FlatArgs {
    fn default() -> Self {
        Self {
            path: String::new(),
            render: RenderOptions::default(),
            output: None,
            json: false,
            quiet: false,
        }
    }
}

impl Default for TreeArgs {
    fn default() -> Self {
        Self {
            path: String::new(),
            levels: None,
            render: RenderOptions::default(),
            output: None,
            quiet: false,
        }
    }
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    if args.len() < 2 {
        return Err(Error::InvalidInput("No command specified".to_string()));
    }

    let command = match args[1].as_str() {
        "flat" => Command::Flat(parse_flat_args(&args[2..])?),
        "tree" => Command::Tree(parse_tree_args(&args[2..])?),
        other => return Err(Error::InvalidInput(format!("Unknown command: {other}"))),
    };

    Ok(CliArgs { command })
}

fn parse_flat_args(args: &[String]) -> Result<FlatArgs> {
    let mut flat_args = FlatArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--max-display-depth" => {
                flat_args.render.max_display_depth =
                    numeric_value(args, &mut i, "--max-display-depth")?;
            }
            "--max-rows" => {
                flat_args.render.max_rows_per_band = numeric_value(args, &mut i, "--max-rows")?;
            }
            "--indent-width" => {
                flat_args.render.indent_width = numeric_value(args, &mut i, "--indent-width")?;
            }
            "--indent-style" => {
                flat_args.render.indent_style = indent_style_value(args, &mut i)?;
            }
            "--output" => {
                flat_args.output = Some(option_value(args, &mut i, "--output")?);
            }
            "--json" => {
                flat_args.json = true;
            }
            "--quiet" => {
                flat_args.quiet = true;
            }
            arg if !arg.starts_with("--") => {
                if flat_args.path.is_empty() {
                    flat_args.path = arg.to_string();
                } else {
                    return Err(Error::InvalidInput(format!("Unexpected argument: {arg}")));
                }
            }
            other => return Err(Error::InvalidInput(format!("Unknown option: {other}"))),
        }
        i += 1;
    }

    if flat_args.path.is_empty() {
        return Err(Error::InvalidInput(
            "Missing required argument: PATH".to_string(),
        ));
    }

    Ok(flat_args)
}

fn parse_tree_args(args: &[String]) -> Result<TreeArgs> {
    let mut tree_args = TreeArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--levels" => {
                tree_args.levels = Some(numeric_value(args, &mut i, "--levels")?);
            }
            "--max-display-depth" => {
                tree_args.render.max_display_depth =
                    numeric_value(args, &mut i, "--max-display-depth")?;
            }
            "--indent-width" => {
                tree_args.render.indent_width = numeric_value(args, &mut i, "--indent-width")?;
            }
            "--indent-style" => {
                tree_args.render.indent_style = indent_style_value(args, &mut i)?;
            }
            "--output" => {
                tree_args.output = Some(option_value(args, &mut i, "--output")?);
            }
            "--quiet" => {
                tree_args.quiet = true;
            }
            arg if !arg.starts_with("--") => {
                if tree_args.path.is_empty() {
                    tree_args.path = arg.to_string();
                } else {
                    return Err(Error::InvalidInput(format!("Unexpected argument: {arg}")));
                }
            }
            other => return Err(Error::InvalidInput(format!("Unknown option: {other}"))),
        }
        i += 1;
    }

    if tree_args.path.is_empty() {
        return Err(Error::InvalidInput(
            "Missing required argument: PATH".to_string(),
        ));
    }

    Ok(tree_args)
}

fn option_value(args: &[String], i: &mut usize, flag: &str) -> Result<String> {
    *i += 1;
    if *i >= args.len() {
        return Err(Error::InvalidInput(format!("{flag} requires a value")));
    }
    Ok(args[*i].clone())
}

fn numeric_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    option_value(args, i, flag)?
        .parse()
        .map_err(|_| Error::InvalidInput(format!("{flag} must be a number")))
}

fn indent_style_value(args: &[String], i: &mut usize) -> Result<IndentStyle> {
    match option_value(args, i, "--indent-style")?.as_str() {
        "flat" => Ok(IndentStyle::Flat),
        "branch" => Ok(IndentStyle::Branch),
        other => Err(Error::InvalidInput(format!(
            "Invalid indent style: {other}. Use 'flat' or 'branch'"
        ))),
    }
}
