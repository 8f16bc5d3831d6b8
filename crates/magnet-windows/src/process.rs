use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
    QueryFullProcessImageNameW,
};
use windows::core::PWSTR;

/// Shown when the owning process cannot be opened (elevated or protected).
pub const UNKNOWN_PROCESS: &str = "Unknown";

/// Returns the executable file name of a process, e.g. `"notepad.exe"`.
pub fn process_name(pid: u32) -> String {
    image_path(pid)
        .as_deref()
        .and_then(file_name)
        .map_or_else(|| UNKNOWN_PROCESS.to_string(), str::to_string)
}

fn image_path(pid: u32) -> Option<String> {
    // SAFETY: PROCESS_QUERY_LIMITED_INFORMATION is the least-privilege right
    // that still allows reading the image name.
    let process = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) }.ok()?;
    let path = query_image(process);
    // SAFETY: we own the handle opened above.
    unsafe {
        let _ = CloseHandle(process);
    }
    path
}

fn query_image(process: HANDLE) -> Option<String> {
    let mut buffer = [0u16; 1024];
    let mut size = buffer.len() as u32;
    // SAFETY: size holds the buffer capacity and is updated to the length
    // written.
    unsafe {
        QueryFullProcessImageNameW(
            process,
            PROCESS_NAME_WIN32,
            PWSTR(buffer.as_mut_ptr()),
            &mut size,
        )
    }
    .ok()?;
    Some(String::from_utf16_lossy(&buffer[..size as usize]))
}

fn file_name(path: &str) -> Option<&str> {
    path.rsplit(['\\', '/']).next().filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_strips_directories() {
        assert_eq!(
            file_name(r"C:\Windows\System32\notepad.exe"),
            Some("notepad.exe")
        );
        assert_eq!(file_name("calc.exe"), Some("calc.exe"));
        assert_eq!(file_name(r"C:\dir\"), None);
    }
}
