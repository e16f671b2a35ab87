// 原始函数指针单元：每个被拦截操作一个，由外部协作者在首个
// trampoline 执行前解析并写入；一次写入、多次读取、本层从不改写
use crate::api::RestoreFunc;
use crate::errno::Errno;
use jni_sys::JNIEnv;
use std::ffi::c_void;
use std::sync::atomic::{AtomicUsize, Ordering};

static FORK_AND_SPECIALIZE: AtomicUsize = AtomicUsize::new(0);
static SPECIALIZE_APP_PROCESS: AtomicUsize = AtomicUsize::new(0);
static FORK_SYSTEM_SERVER: AtomicUsize = AtomicUsize::new(0);
static SYSTEM_PROPERTIES_SET: AtomicUsize = AtomicUsize::new(0);
static RESTORE_REPLACED: AtomicUsize = AtomicUsize::new(0);

fn store_once(cell: &AtomicUsize, func: usize) -> Errno {
    if func == 0 {
        return Errno::InvalidArg;
    }
    match cell.compare_exchange(0, func, Ordering::AcqRel, Ordering::Acquire) {
        Ok(_) => Errno::Ok,
        Err(_) => Errno::AlreadySet,
    }
}

// 调用点读取；为空属于致命前置条件违规：继续执行会破坏进程 fork 行为，
// 没有恢复路径，立即终止进程
fn load_required(cell: &AtomicUsize, what: &str) -> usize {
    let addr = cell.load(Ordering::Acquire);
    if addr == 0 {
        crate::log::error(format_args!("original {what} pointer not registered"));
        std::process::abort();
    }
    addr
}

pub(crate) fn set_fork_and_specialize(func: *mut c_void) -> Errno {
    store_once(&FORK_AND_SPECIALIZE, func as usize)
}

pub(crate) fn set_specialize_app_process(func: *mut c_void) -> Errno {
    store_once(&SPECIALIZE_APP_PROCESS, func as usize)
}

pub(crate) fn set_fork_system_server(func: *mut c_void) -> Errno {
    store_once(&FORK_SYSTEM_SERVER, func as usize)
}

pub(crate) fn set_system_properties_set(func: *mut c_void) -> Errno {
    store_once(&SYSTEM_PROPERTIES_SET, func as usize)
}

pub(crate) fn set_restore(func: RestoreFunc) -> Errno {
    store_once(&RESTORE_REPLACED, func as usize)
}

pub(crate) fn fork_and_specialize_addr() -> usize {
    load_required(&FORK_AND_SPECIALIZE, "nativeForkAndSpecialize")
}

pub(crate) fn specialize_app_process_addr() -> usize {
    load_required(&SPECIALIZE_APP_PROCESS, "nativeSpecializeAppProcess")
}

pub(crate) fn fork_system_server_addr() -> usize {
    load_required(&FORK_SYSTEM_SERVER, "nativeForkSystemServer")
}

pub(crate) fn system_properties_set_addr() -> usize {
    load_required(&SYSTEM_PROPERTIES_SET, "SystemProperties.set")
}

// 恢复回调未注册时视为无事可做（加载器可能没有替换任何表项），
// 与原始指针单元不同，这里不是致命条件
pub(crate) unsafe fn restore_replaced(env: *mut JNIEnv) {
    let addr = RESTORE_REPLACED.load(Ordering::Acquire);
    if addr != 0 {
        let func: RestoreFunc = std::mem::transmute(addr);
        func(env);
    }
}

#[cfg(test)]
pub(crate) fn reset() {
    FORK_AND_SPECIALIZE.store(0, Ordering::SeqCst);
    SPECIALIZE_APP_PROCESS.store(0, Ordering::SeqCst);
    FORK_SYSTEM_SERVER.store(0, Ordering::SeqCst);
    SYSTEM_PROPERTIES_SET.store(0, Ordering::SeqCst);
    RESTORE_REPLACED.store(0, Ordering::SeqCst);
}
