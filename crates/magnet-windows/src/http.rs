//! One-shot HTTPS GET over WinHTTP, sized for the release check.

use std::ffi::c_void;
use std::io;
use std::time::Duration;

use windows::Win32::Networking::WinHttp::{
    WINHTTP_ACCESS_TYPE_AUTOMATIC_PROXY, WINHTTP_FLAG_SECURE, WinHttpCloseHandle, WinHttpConnect,
    WinHttpOpen, WinHttpOpenRequest, WinHttpQueryHeaders, WinHttpReadData,
    WinHttpReceiveResponse, WinHttpSendRequest, WinHttpSetTimeouts,
};
use windows::core::PCWSTR;

const HTTPS_PORT: u16 = 443;
const QUERY_STATUS_CODE: u32 = 19;
const QUERY_FLAG_NUMBER: u32 = 0x2000_0000;
const READ_CHUNK: usize = 8 * 1024;

/// A session, connection or request handle; closed on drop.
struct Internet(*mut c_void);

impl Internet {
    fn wrap(raw: *mut c_void, what: &str) -> io::Result<Self> {
        if raw.is_null() {
            Err(io::Error::other(format!("WinHTTP could not open {what}")))
        } else {
            Ok(Self(raw))
        }
    }
}

impl Drop for Internet {
    fn drop(&mut self) {
        // SAFETY: the handle is non-null and owned by this value.
        unsafe {
            let _ = WinHttpCloseHandle(self.0);
        }
    }
}

/// Fetches `https://{host}{path}` and returns the body of a 200 response.
///
/// `timeout` bounds each phase (resolve, connect, send, receive) on its
/// own. Any other status code is an error, so a rate-limit page never
/// reaches the JSON parser.
pub fn get(host: &str, path: &str, timeout: Duration) -> io::Result<String> {
    // api.github.com rejects requests without a User-Agent.
    let agent = wide(concat!("window-magnet/", env!("CARGO_PKG_VERSION")));
    let host = wide(host);
    let path = wide(path);
    let verb = wide("GET");
    let timeout_ms = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);

    // SAFETY: every wide string outlives the calls that borrow it, and each
    // handle is closed by its `Internet` after the handles opened from it.
    unsafe {
        let session = Internet::wrap(
            WinHttpOpen(
                PCWSTR(agent.as_ptr()),
                WINHTTP_ACCESS_TYPE_AUTOMATIC_PROXY,
                None,
                None,
                0,
            ),
            "a session",
        )?;
        WinHttpSetTimeouts(session.0, timeout_ms, timeout_ms, timeout_ms, timeout_ms)?;

        let connection = Internet::wrap(
            WinHttpConnect(session.0, PCWSTR(host.as_ptr()), HTTPS_PORT, 0),
            "a connection",
        )?;
        let request = Internet::wrap(
            WinHttpOpenRequest(
                connection.0,
                PCWSTR(verb.as_ptr()),
                PCWSTR(path.as_ptr()),
                None,
                None,
                std::ptr::null(),
                WINHTTP_FLAG_SECURE,
            ),
            "a request",
        )?;

        WinHttpSendRequest(request.0, None, None, 0, 0, 0)?;
        WinHttpReceiveResponse(request.0, std::ptr::null_mut())?;

        let status = status_code(&request)?;
        if status != 200 {
            return Err(io::Error::other(format!("HTTP status {status}")));
        }

        let body = read_to_end(&request)?;
        String::from_utf8(body).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

fn status_code(request: &Internet) -> io::Result<u32> {
    let mut status: u32 = 0;
    let mut size = size_of::<u32>() as u32;
    // SAFETY: the buffer is a u32 and `size` says so.
    unsafe {
        WinHttpQueryHeaders(
            request.0,
            QUERY_STATUS_CODE | QUERY_FLAG_NUMBER,
            PCWSTR::null(),
            Some((&mut status as *mut u32).cast()),
            &mut size,
            None,
        )?;
    }
    Ok(status)
}

fn read_to_end(request: &Internet) -> io::Result<Vec<u8>> {
    let mut body = Vec::new();
    let mut chunk = vec![0u8; READ_CHUNK];
    loop {
        let mut read: u32 = 0;
        // SAFETY: WinHTTP writes at most `chunk.len()` bytes into `chunk`.
        unsafe {
            WinHttpReadData(
                request.0,
                chunk.as_mut_ptr().cast(),
                chunk.len() as u32,
                &mut read,
            )?;
        }
        if read == 0 {
            return Ok(body);
        }
        body.extend_from_slice(&chunk[..read as usize]);
    }
}

/// Null-terminated UTF-16 copy of `s`.
fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
