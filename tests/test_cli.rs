use bytelit::Error;

#[test]
fn test_run_command_prints_literal() -> bytelit::Result<()> {
    // arrange
    let file = bytelit_testhelpers::create_file("asset.bin", &[255, 0, 128]);

    // act
    let output = bytelit_testhelpers::run_command(vec![file.to_str().unwrap()])?;

    // assert
    assert_eq!(output, "var imageData = []byte{255, 0, 128}\n");
    Ok(())
}

#[test]
fn test_run_command_with_name() -> bytelit::Result<()> {
    // arrange
    let file = bytelit_testhelpers::create_file("logo.bin", &[4, 2]);

    // act
    let output = bytelit_testhelpers::run_command_string(format!(
        "bytelit --name logoData '{}'",
        file.display()
    ))?;

    // assert
    assert_eq!(output, "var logoData = []byte{4, 2}\n");
    Ok(())
}

#[test]
fn test_run_command_accepts_verbose_flags() -> bytelit::Result<()> {
    // arrange
    let file = bytelit_testhelpers::create_file("asset.bin", &[7]);

    // act
    let output =
        bytelit_testhelpers::run_command_string(format!("-vv '{}'", file.display()))?;

    // assert
    assert_eq!(output, "var imageData = []byte{7}\n");
    Ok(())
}

#[test]
fn test_missing_path_is_usage_error() {
    // act
    let result = bytelit_testhelpers::run_command_string("bytelit");

    // assert
    match result {
        Err(Error::Clap(err)) => {
            assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument)
        }
        other => panic!("expected a usage error, got {:?}", other),
    }
}

#[test]
fn test_extra_positional_is_usage_error() {
    // arrange
    let file = bytelit_testhelpers::create_file("asset.bin", &[1]);

    // act
    let result = bytelit_testhelpers::run_command_string(format!(
        "'{}' '{}'",
        file.display(),
        file.display()
    ));

    // assert
    assert!(matches!(result, Err(Error::Clap(_))));
}

#[test]
fn test_nonexistent_path_is_fatal() {
    // arrange
    let missing = bytelit_testhelpers::create_temporary_directory().join("nope.png");

    // act
    let result = bytelit_testhelpers::run_command(vec![missing.to_str().unwrap()]);

    // assert
    assert!(matches!(result, Err(Error::Fatal(_, _))));
}

#[test]
fn test_non_identifier_name_is_fatal() {
    // arrange
    let file = bytelit_testhelpers::create_file("asset.bin", &[1]);

    // act
    let result = bytelit_testhelpers::run_command_string(format!(
        "--name my-data '{}'",
        file.display()
    ));

    // assert
    match result {
        Err(err @ Error::Fatal(Some(_), _)) => {
            let message = err.to_string();
            assert!(message.starts_with("fatal: invalid options"), "{}", message);
            assert!(message.contains("my-data"), "{}", message);
        }
        other => panic!("expected a fatal error, got {:?}", other),
    }
}

#[test]
fn test_run_command_accepts_borrowed_arguments() -> bytelit::Result<()> {
    // arrange
    let file = bytelit_testhelpers::create_file("asset.bin", &[42]);
    let path = file.display().to_string();

    // act
    let output = bytelit_testhelpers::run_command(["bytelit", "-n", "answer", path.as_str()])?;

    // assert
    assert_eq!(output, "var answer = []byte{42}\n");
    Ok(())
}
