use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "firstmove";

#[test]
fn manual_session() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("e2e4\ne7e5\nend\n")
            .assert()
            .success()
            .stdout(
                contains("firstmove")
                    .and(contains("BR BN BB BQ BK BB BN BR"))
                    .and(contains("Make a move..."))
                    .and(contains("-- -- -- -- WP -- -- --"))
                    .and(contains("Possible moves").not()),
            ),
    );
}

#[test]
fn engine_plays_black() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.arg("black");

    drop(
        cmd.write_stdin("e2e4\nend\n")
            .assert()
            .success()
            .stdout(
                contains("Possible moves:\nb8c6, b8a6, ")
                    .and(contains("Making move: b8c6"))
                    .and(contains("BR -- BB BQ BK BB BN BR")),
            ),
    );
}

#[test]
fn engine_plays_white() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.arg("white");

    drop(
        cmd.write_stdin("end\n")
            .assert()
            .success()
            .stdout(contains("a2a3\na2a4\nb2b3").and(contains("WP -- -- -- -- -- -- --"))),
    );
}

#[test]
fn invalid_move_is_reported() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("e9e4\nend\n")
            .assert()
            .success()
            .stdout(contains("Invalid move 'e9e4'")),
    );
}

#[test]
fn rules_flags() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.args(["black", "--no-forced-captures", "--knight-checks"]);

    drop(
        cmd.write_stdin("e2e4\nd2d4\nend\n")
            .assert()
            .success()
            .stdout(
                contains("Possible moves:\na8b8, g8h6, g8f6, ")
                    .and(contains("c6d4, c6b4, c6e5, c6a5, c6b8"))
                    .and(contains("Making move: a8b8")),
            ),
    );
}

#[test]
fn logs_go_to_stderr() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.args(["black", "-vv"]);

    drop(
        cmd.write_stdin("e2e4\nend\n")
            .assert()
            .success()
            .stderr(contains("Starting session: engine plays Black").and(contains("candidate moves")))
            .stdout(contains("candidate moves").not()),
    );
}

#[test]
fn unknown_argument() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.arg("green");

    drop(
        cmd.assert()
            .failure()
            .stderr(contains("invalid value 'green'")),
    );
}

#[test]
fn log_level_from_environment() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.arg("black").env("FIRSTMOVE_LOG", "debug");

    drop(
        cmd.write_stdin("e2e4\nend\n")
            .assert()
            .success()
            .stderr(contains("candidate moves").and(contains("Engine move: b8c6"))),
    );
}

#[test]
fn verbosity_overrides_environment() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.args(["black", "-v"]).env("FIRSTMOVE_LOG", "trace");

    drop(
        cmd.write_stdin("e2e4\nend\n")
            .assert()
            .success()
            .stderr(contains("Starting session").and(contains("candidate moves").not())),
    );
}
