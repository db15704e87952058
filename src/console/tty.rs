// src/console/tty.rs

//! A `SystemConsole` over the process's controlling terminal: raw-mode
//! stdin for key input and buffered stdout for output.

use super::SystemConsole;
use crate::ansi::{self, CLEAR_SCREEN_AND_HOME, CURSOR_HIDE, CURSOR_SHOW};
use anyhow::{Context, Result};
use libc::{STDIN_FILENO, TIOCGWINSZ, winsize};
use log::{debug, error, info, trace, warn};
use std::io::{self, BufWriter, Read, Stdout, Write, stdin, stdout};
use std::mem;
use std::os::unix::io::RawFd;
use termios::{ECHO, ICANON, ISIG, TCSANOW, Termios, VMIN, VTIME, tcsetattr};

const FALLBACK_COLUMNS: u16 = 80;
const FALLBACK_ROWS: u16 = 24;

pub struct TtyConsole {
    original_termios: Option<Termios>,
    out: BufWriter<Stdout>,
    cursor_visible: bool,
}

impl TtyConsole {
    /// Puts the terminal into raw mode, hides the cursor, and clears the
    /// screen. The original terminal state is restored on drop.
    ///
    /// # Errors
    /// Fails if raw mode cannot be applied or the initial escapes cannot be
    /// written.
    pub fn new() -> Result<Self> {
        info!("Creating new TtyConsole.");
        let original_termios = match Termios::from_fd(STDIN_FILENO) {
            Ok(ts) => Some(ts),
            Err(e) => {
                warn!(
                    "Failed to get initial termios: {}. Proceeding without raw mode.",
                    e
                );
                None
            }
        };

        if let Some(ref ots) = original_termios {
            let mut raw_termios = *ots;
            raw_termios.c_lflag &= !(ECHO | ICANON | ISIG);
            raw_termios.c_iflag &=
                !(libc::IXON | libc::IXOFF | libc::ICRNL | libc::INLCR | libc::IGNCR);
            // Reads block until one byte arrives; availability is checked with poll.
            raw_termios.c_cc[VMIN] = 1;
            raw_termios.c_cc[VTIME] = 0;
            tcsetattr(STDIN_FILENO, TCSANOW, &raw_termios)
                .context("TtyConsole: Failed to set raw terminal attributes")?;
            debug!("TtyConsole: Terminal set to raw mode.");
        }

        let mut console = TtyConsole {
            original_termios,
            out: BufWriter::new(stdout()),
            cursor_visible: true,
        };
        console.set_cursor_visible(false)?;
        console
            .out
            .write_all(CLEAR_SCREEN_AND_HOME.as_bytes())
            .context("TtyConsole: Failed to clear screen")?;
        Ok(console)
    }

    /// Terminal size in character cells as `(columns, rows)`.
    ///
    /// # Errors
    /// Fails if the size cannot be queried from stdin.
    pub fn size(&self) -> Result<(u16, u16)> {
        terminal_size_cells(STDIN_FILENO)
    }

    fn cleanup(&mut self) -> Result<()> {
        info!("TtyConsole: Cleaning up...");
        self.set_cursor_visible(true)?;
        // Leave the shell prompt below whatever was drawn.
        self.out
            .write_all(b"\x1b[0m\n")
            .context("TtyConsole: Failed to reset attributes")?;
        self.out
            .flush()
            .context("TtyConsole: Failed to flush during cleanup")?;
        if let Some(original_termios) = self.original_termios.take() {
            debug!("TtyConsole: Restoring original terminal attributes.");
            tcsetattr(STDIN_FILENO, TCSANOW, &original_termios)
                .context("TtyConsole: Failed to restore original terminal attributes")?;
        }
        Ok(())
    }
}

impl SystemConsole for TtyConsole {
    fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        let escape = if visible { CURSOR_SHOW } else { CURSOR_HIDE };
        self.out
            .write_all(escape.as_bytes())
            .and_then(|()| self.out.flush())
            .context("TtyConsole: Failed to change cursor visibility")?;
        self.cursor_visible = visible;
        Ok(())
    }

    fn is_key_available(&mut self) -> Result<bool> {
        let mut fds = libc::pollfd {
            fd: STDIN_FILENO,
            events: libc::POLLIN,
            revents: 0,
        };
        // SAFETY: `fds` is a valid, initialized pollfd and nfds is 1.
        let ready = unsafe { libc::poll(&mut fds, 1, 0) };
        if ready < 0 {
            return Err(anyhow::Error::from(io::Error::last_os_error())
                .context("TtyConsole: poll on stdin failed"));
        }
        Ok(ready > 0 && fds.revents & libc::POLLIN != 0)
    }

    fn read_key(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        loop {
            match stdin().read(&mut byte) {
                Ok(0) => anyhow::bail!("TtyConsole: EOF on stdin"),
                Ok(_) => {
                    trace!("TtyConsole: read key {:#04x}", byte[0]);
                    return Ok(byte[0]);
                }
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e).context("TtyConsole: Error reading from stdin"),
            }
        }
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.out
    }

    fn set_cursor_position(&mut self, left: u16, top: u16) -> Result<()> {
        self.out
            .write_all(ansi::cursor_position(left, top).as_bytes())
            .context("TtyConsole: Failed to set cursor position")
    }
}

fn terminal_size_cells(fd: RawFd) -> Result<(u16, u16)> {
    // SAFETY: `winsz` is zero-initialized plain data that ioctl fills in.
    unsafe {
        let mut winsz: winsize = mem::zeroed();
        if libc::ioctl(fd, TIOCGWINSZ, &mut winsz) == -1 {
            return Err(anyhow::Error::from(io::Error::last_os_error())
                .context("TtyConsole: ioctl(TIOCGWINSZ) failed"));
        }
        let cols = if winsz.ws_col == 0 {
            FALLBACK_COLUMNS
        } else {
            winsz.ws_col
        };
        let rows = if winsz.ws_row == 0 {
            FALLBACK_ROWS
        } else {
            winsz.ws_row
        };
        Ok((cols, rows))
    }
}

impl Drop for TtyConsole {
    fn drop(&mut self) {
        info!("TtyConsole: Dropping instance, attempting cleanup.");
        if let Err(e) = self.cleanup() {
            error!("TtyConsole: Error during cleanup in drop: {}", e);
        }
    }
}
