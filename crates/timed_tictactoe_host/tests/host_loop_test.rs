//! Tests for the host event loop with a paused clock.

use std::time::Duration;

use timed_tictactoe::{Player, PlyKind, Session, Settings};
use timed_tictactoe_host::run;
use tokio::io::{AsyncWriteExt, BufReader, duplex};
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn test_commands_are_applied_in_order() {
    let input: &[u8] = b"play 0\nplay 4\nplay top-center\nundo\nbogus\nquit\nplay 8\n";
    let mut output = Vec::new();

    let session = run(Session::default(), input, &mut output)
        .await
        .expect("Host loop failed");

    assert_eq!(session.pointer(), 2);
    assert_eq!(session.history().len(), 4);
    assert_eq!(session.undos_remaining(), 2);

    let text = String::from_utf8(output).expect("Output is UTF-8");
    assert!(text.contains("Unknown command 'bogus'"));
    assert!(text.contains("Next player: X (Time: 10s)"));
}

#[tokio::test(start_paused = true)]
async fn test_clock_forfeits_idle_player() {
    let settings = Settings::default().with_turn_duration(2);
    let (mut writer, reader) = duplex(64);

    let handle = tokio::spawn(async move {
        let mut output = Vec::new();
        let session = run(Session::new(settings), BufReader::new(reader), &mut output).await;
        (session, output)
    });

    sleep(Duration::from_millis(2500)).await;
    writer.write_all(b"show\n").await.expect("Write failed");
    drop(writer);

    let (session, output) = handle.await.expect("Host task panicked");
    let session = session.expect("Host loop failed");

    assert_eq!(
        session.history().last().map(|ply| ply.kind()),
        Some(PlyKind::Forfeit { player: Player::X })
    );
    assert_eq!(session.current_player(), Player::O);

    let text = String::from_utf8(output).expect("Output is UTF-8");
    assert!(text.contains("Time's up for X! Next player: O"));
}

#[tokio::test(start_paused = true)]
async fn test_command_resets_the_clock() {
    let settings = Settings::default().with_turn_duration(2);
    let (mut writer, reader) = duplex(64);

    let handle = tokio::spawn(async move {
        let mut output = Vec::new();
        run(Session::new(settings), BufReader::new(reader), &mut output).await
    });

    // X moves just before running out; O gets a fresh two seconds.
    sleep(Duration::from_millis(1500)).await;
    writer.write_all(b"play 4\n").await.expect("Write failed");
    sleep(Duration::from_millis(1200)).await;
    drop(writer);

    let session = handle
        .await
        .expect("Host task panicked")
        .expect("Host loop failed");

    assert!(session.history().iter().all(|ply| !ply.is_forfeit()));
    assert_eq!(session.current_player(), Player::O);
    assert_eq!(session.remaining_seconds(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_unattended_host_keeps_history_short() {
    let settings = Settings::default().with_turn_duration(1);
    let (writer, reader) = duplex(64);

    let handle = tokio::spawn(async move {
        let mut output = Vec::new();
        let session = run(Session::new(settings), BufReader::new(reader), &mut output).await;
        (session, output)
    });

    sleep(Duration::from_millis(10_500)).await;
    drop(writer);

    let (session, output) = handle.await.expect("Host task panicked");
    let session = session.expect("Host loop failed");

    assert_eq!(session.history().len(), 1);
    assert_eq!(session.current_player(), Player::X);

    let text = String::from_utf8(output).expect("Output is UTF-8");
    assert_eq!(text.matches("Time's up for X!\n").count(), 5);
    assert_eq!(text.matches("Time's up for O!\n").count(), 5);
}
