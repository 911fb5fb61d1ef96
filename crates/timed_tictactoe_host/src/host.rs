//! Event loop: one-second ticks and stdin lines, serialized onto a session.

use std::time::Duration;

use anyhow::Result;
use timed_tictactoe::{Session, TickOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::{debug, info, instrument, warn};

use crate::command::{HELP, HostCommand};
use crate::render::{countdown, render, timed_out};

/// Clock resolution.
pub const TICK: Duration = Duration::from_secs(1);

/// Remaining seconds at or below which each tick is announced.
pub const COUNTDOWN_FROM: u32 = 3;

fn ticker() -> Interval {
    let mut ticker = interval_at(Instant::now() + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Drives `session` until `quit` or end of input, returning the final state.
///
/// Ticks carry the epoch that was current when the interval was armed.
/// Whenever a command re-arms the session clock the interval restarts,
/// so the next tick lands a full second later.
#[instrument(skip_all)]
pub async fn run<R, W>(mut session: Session, input: R, out: &mut W) -> Result<Session>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut armed = session.timer_epoch();
    let mut ticker = ticker();

    write(out, &render(&session.view())).await?;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let (next, outcome) = session.tick(armed);
                session = next;
                match outcome {
                    TickOutcome::Running { remaining } if remaining <= COUNTDOWN_FROM => {
                        write(out, &countdown(session.current_player(), remaining)).await?;
                    }
                    TickOutcome::Forfeited { player } => {
                        debug!(%player, "Redrawing after forfeit");
                        write(out, &timed_out(player)).await?;
                        write(out, &render(&session.view())).await?;
                    }
                    TickOutcome::Running { .. } | TickOutcome::Idle => {}
                    TickOutcome::Stale => debug!(%armed, "Stale tick"),
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("End of input");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<HostCommand>() {
                    Ok(HostCommand::Quit) => break,
                    Ok(command) => {
                        session = command.apply(session);
                        write(out, &render(&session.view())).await?;
                    }
                    Err(err) => {
                        warn!(%err, "Unreadable command");
                        write(out, &format!("{}\n{}\n", err, HELP)).await?;
                    }
                }
            }
        }

        if session.timer_epoch() != armed {
            armed = session.timer_epoch();
            ticker.reset();
        }
    }

    info!(scores = %session.view().score_line(), "Session ended");
    Ok(session)
}

async fn write<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}
