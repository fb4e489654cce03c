use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
    process::{Command, Output},
    str,
};

use bytelit::{cli, embed, output::OutputWriter};

use shlex;

pub fn run_command<I, T>(args: I) -> bytelit::Result<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut writer = CapturingOutputWriter {
        output: String::new(),
    };

    let mut complete_args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let has_bytelit = complete_args
        .first()
        .map(|arg| arg == "bytelit")
        .unwrap_or(false);
    if !has_bytelit {
        complete_args.insert(0, OsString::from("bytelit"));
    }

    cli::run_command(complete_args, &mut writer)?;
    Ok(writer.output)
}

pub fn run_command_string<S: AsRef<str>>(args: S) -> bytelit::Result<String> {
    let args = shlex::split(args.as_ref()).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "Failed to split arguments")
    })?;
    run_command(args)
}

pub fn bytelit_embed(path: &Path, options: &embed::Options) -> bytelit::Result<String> {
    let mut writer = CapturingOutputWriter {
        output: String::new(),
    };
    embed::embed_file(path, options, &mut writer)?;
    Ok(writer.output)
}

pub fn bytelit_embed_default(path: &Path) -> bytelit::Result<String> {
    bytelit_embed(path, &embed::Options::default())
}

pub struct CapturingOutputWriter {
    pub output: String,
}

impl OutputWriter for CapturingOutputWriter {
    fn write(&mut self, content: String) -> io::Result<&mut dyn OutputWriter> {
        self.output.push_str(content.as_str());
        Ok(self)
    }
}

pub struct FailingOutputWriter;

impl OutputWriter for FailingOutputWriter {
    fn write(&mut self, _: String) -> io::Result<&mut dyn OutputWriter> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
    }
}

/**
 * Write the content to a file with the given name in a fresh temporary directory and return the
 * file's path.
 */
pub fn create_file(name: &str, content: &[u8]) -> PathBuf {
    let path = create_temporary_directory().join(name);
    fs::write(&path, content).expect("Failed to write file");
    path
}

pub fn create_temporary_directory() -> PathBuf {
    let output = Command::new("mktemp")
        .args(["-d", "--tmpdir", "bytelit-test-XXXXXX"])
        .output()
        .expect("Failed running mktemp command");
    assert_eq!(output.status.code().unwrap(), 0);

    let stdout = get_stdout(&output);
    PathBuf::from(stdout)
}

fn get_stdout(output: &Output) -> String {
    String::from(
        str::from_utf8(&output.stdout)
            .expect("Failed to decode process output")
            .trim_end_matches("\n"),
    )
}
