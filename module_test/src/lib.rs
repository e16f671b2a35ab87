#![allow(unsafe_op_in_unsafe_fn)]

// 示例模块：统计各入口的触发次数，并演示 pre 阶段改写参数
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

use jni_sys::{JNIEnv, jclass, jint};
use zygote_hook::{
    Errno, ForkAndSpecializeArgs, ForkSystemServerArgs, Module, SpecializeAppProcessArgs,
    register_module, set_debug,
};

pub static FORK_PRE_COUNT: AtomicUsize = AtomicUsize::new(0);
pub static FORK_POST_COUNT: AtomicUsize = AtomicUsize::new(0);
pub static SPECIALIZE_PRE_COUNT: AtomicUsize = AtomicUsize::new(0);
pub static SPECIALIZE_POST_COUNT: AtomicUsize = AtomicUsize::new(0);
pub static SERVER_PRE_COUNT: AtomicUsize = AtomicUsize::new(0);
pub static SERVER_POST_COUNT: AtomicUsize = AtomicUsize::new(0);
pub static LAST_FORK_RESULT: AtomicI32 = AtomicI32::new(-1);

unsafe extern "C" fn fork_pre(
    _env: *mut JNIEnv,
    _clazz: jclass,
    args: *mut ForkAndSpecializeArgs,
) {
    FORK_PRE_COUNT.fetch_add(1, Ordering::Relaxed);
    // 演示改写：打开 DEBUG_ENABLE_JDWP 位
    (*args).runtime_flags |= 1;
}

unsafe extern "C" fn fork_post(_env: *mut JNIEnv, _clazz: jclass, res: jint) {
    FORK_POST_COUNT.fetch_add(1, Ordering::Relaxed);
    LAST_FORK_RESULT.store(res, Ordering::Relaxed);
}

unsafe extern "C" fn specialize_pre(
    _env: *mut JNIEnv,
    _clazz: jclass,
    _args: *mut SpecializeAppProcessArgs,
) {
    SPECIALIZE_PRE_COUNT.fetch_add(1, Ordering::Relaxed);
}

unsafe extern "C" fn specialize_post(_env: *mut JNIEnv, _clazz: jclass) {
    SPECIALIZE_POST_COUNT.fetch_add(1, Ordering::Relaxed);
}

unsafe extern "C" fn server_pre(
    _env: *mut JNIEnv,
    _clazz: jclass,
    _args: *mut ForkSystemServerArgs,
) {
    SERVER_PRE_COUNT.fetch_add(1, Ordering::Relaxed);
}

unsafe extern "C" fn server_post(_env: *mut JNIEnv, _clazz: jclass, res: jint) {
    SERVER_POST_COUNT.fetch_add(1, Ordering::Relaxed);
    LAST_FORK_RESULT.store(res, Ordering::Relaxed);
}

// 只观察一个固定 uid，其余全部跳过
unsafe extern "C" fn skip_unless_10100(uid: jint) -> bool {
    uid != 10100
}

// 加载器在 dlopen 后调用的入口
#[unsafe(no_mangle)]
pub extern "C" fn module_test_init() -> i32 {
    set_debug(true);

    let mut module = Module::new("module_test");
    module.fork_and_specialize_pre = Some(fork_pre);
    module.fork_and_specialize_post = Some(fork_post);
    module.specialize_app_process_pre = Some(specialize_pre);
    module.specialize_app_process_post = Some(specialize_post);
    module.fork_system_server_pre = Some(server_pre);
    module.fork_system_server_post = Some(server_post);
    module.should_skip_uid = Some(skip_unless_10100);

    match register_module(module) {
        Errno::Ok => 0,
        err => err.as_i32(),
    }
}
