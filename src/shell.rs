// 対話シェル - 1行ごとにコマンドを解釈してドライブ操作を呼び出す

use regex::Regex;

use crate::api_types::{self, ChildItemsRequest, NewDriveRequest, TagItem};
use crate::config::{regex as groups, shell};
use crate::drive_commands;
use crate::errors::{AppError, AppResult};
use crate::AppState;

const HELP: &str = "\
commands:
  mount <name> <root> [separator]   mount a new empty drive
  unmount <name>                    drop a drive and its tags
  drives                            list mounted drives
  new <path>                        add a tag
  get <path>                        show a tag added with `new`
  ls [path] [-r] [-d <depth>]       list child tags
  test <path>                       check that a path exists
  join <parent> <child>             join two paths
  parent <path>                     parent of a path
  leaf <path>                       last segment of a path
  cd <path> / pwd                   change / show the current location
  schema                            print the listing JSON schema
  types                             print TypeScript declarations of the API types
  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutcome {
    Output(String),
    Exit,
}

pub struct Shell {
    argument_pattern: Regex,
}

impl Shell {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            argument_pattern: Regex::new(shell::ARGUMENT_PATTERN)?,
        })
    }

    /// 空白で引数に分割する（ダブルクォートで囲んだ部分は1引数、引用符は除去）
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        self.argument_pattern
            .captures_iter(line)
            .filter_map(|captures| {
                captures
                    .get(groups::GROUP_1)
                    .or_else(|| captures.get(groups::GROUP_2))
                    .map(|m| m.as_str().to_string())
            })
            .collect()
    }

    pub fn prompt(&self, state: &AppState) -> String {
        let location = drive_commands::get_location(state)
            .ok()
            .flatten()
            .unwrap_or_default();
        format!("{location}{}", shell::PROMPT_SUFFIX)
    }

    pub fn execute(&self, state: &AppState, line: &str) -> AppResult<ShellOutcome> {
        let mut args = self.tokenize(line).into_iter();
        let Some(command) = args.next() else {
            return Ok(ShellOutcome::Output(String::new()));
        };
        let args: Vec<String> = args.collect();
        let arg = |index: usize| args.get(index).cloned();

        let output = match command.as_str() {
            "exit" | "quit" => return Ok(ShellOutcome::Exit),
            "help" => HELP.to_string(),
            "mount" => {
                let request = NewDriveRequest {
                    name: required(arg(0), "name")?,
                    root: required(arg(1), "root")?,
                    separator: parse_separator(arg(2))?,
                    native_separator: None,
                };
                let info = drive_commands::new_drive(state, request)?;
                serde_json::to_string(&info)?
            }
            "unmount" => {
                let info = drive_commands::remove_drive(state, required(arg(0), "name")?)?;
                serde_json::to_string(&info)?
            }
            "drives" => json_lines(&drive_commands::get_drives(state)?)?,
            "new" => {
                let item = drive_commands::new_item(state, arg(0))?;
                serde_json::to_string(&item)?
            }
            "get" => {
                let item = drive_commands::get_item(state, arg(0))?;
                serde_json::to_string(&item)?
            }
            "ls" => {
                let request = parse_list_args(&args)?;
                let items: Vec<TagItem> = drive_commands::get_child_items(state, request)?;
                json_lines(&items)?
            }
            "test" => drive_commands::test_path(state, arg(0))?.to_string(),
            "join" => drive_commands::join_path(state, arg(0), arg(1))?,
            "parent" => drive_commands::split_parent(state, arg(0))?,
            "leaf" => drive_commands::split_leaf(state, arg(0))?,
            "cd" => drive_commands::set_location(state, arg(0))?,
            "pwd" => drive_commands::get_location(state)?.unwrap_or_default(),
            "schema" => api_types::generate_json_schema()?,
            "types" => api_types::generate_typescript_bindings().join("\n\n"),
            other => return Err(AppError::UnknownCommand(other.to_string())),
        };

        Ok(ShellOutcome::Output(output))
    }
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::validation(field, "missing argument"))
}

/// 区切り文字はちょうど1文字であること
fn parse_separator(value: Option<String>) -> AppResult<Option<char>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), None) => Ok(Some(separator)),
        _ => Err(AppError::validation(
            "separator",
            format!("{value:?} is not a single character"),
        )),
    }
}

fn json_lines<T: serde::Serialize>(items: &[T]) -> AppResult<String> {
    let lines = items
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

fn parse_list_args(args: &[String]) -> AppResult<ChildItemsRequest> {
    let mut request = ChildItemsRequest::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            shell::RECURSE_FLAG => request.recurse = true,
            shell::DEPTH_FLAG => {
                let value = iter
                    .next()
                    .ok_or_else(|| AppError::validation("depth", "missing value"))?;
                let depth = value.parse::<u32>().map_err(|e| {
                    AppError::validation("depth", format!("{value:?} is not a depth: {e}"))
                })?;
                // 深さ指定は再帰を含意する
                request.recurse = true;
                request.depth = Some(depth);
            }
            path => request.path = Some(path.to_string()),
        }
    }

    Ok(request)
}
