use crate::errno::Errno;
use crate::hooks;
use crate::hooks::args::{ForkAndSpecializeArgs, ForkSystemServerArgs, SpecializeAppProcessArgs};
use jni_sys::{JNIEnv, jclass, jint};
use std::ffi::c_void;

// fork-and-specialize 家族的前置 hook，可原地改写全部规范化字段
pub type ForkAndSpecializePreFunc =
    unsafe extern "C" fn(env: *mut JNIEnv, clazz: jclass, args: *mut ForkAndSpecializeArgs);
// fork-and-specialize 家族的后置 hook，res 为原始调用的返回值（0 表示子进程侧）
pub type ForkAndSpecializePostFunc =
    unsafe extern "C" fn(env: *mut JNIEnv, clazz: jclass, res: jint);

// specialize-app-process 家族的前置/后置 hook，该家族无返回值
pub type SpecializeAppProcessPreFunc =
    unsafe extern "C" fn(env: *mut JNIEnv, clazz: jclass, args: *mut SpecializeAppProcessArgs);
pub type SpecializeAppProcessPostFunc = unsafe extern "C" fn(env: *mut JNIEnv, clazz: jclass);

// fork-system-server 家族的前置/后置 hook，不经过 uid 过滤
pub type ForkSystemServerPreFunc =
    unsafe extern "C" fn(env: *mut JNIEnv, clazz: jclass, args: *mut ForkSystemServerArgs);
pub type ForkSystemServerPostFunc =
    unsafe extern "C" fn(env: *mut JNIEnv, clazz: jclass, res: jint);

// 自定义 uid 过滤器，返回 true 表示跳过该 uid，完全取代默认策略
pub type ShouldSkipUidFunc = unsafe extern "C" fn(uid: jint) -> bool;

// 原始调用成功后恢复临时替换的 native 方法表项，由加载器提供
pub type RestoreFunc = unsafe extern "C" fn(env: *mut JNIEnv);

// SystemProperties.set 的原始实现签名（JNI 调用约定）
pub type SystemPropertiesSetFunc = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jni_sys::jobject,
    key: jni_sys::jstring,
    value: jni_sys::jstring,
);

// 一个已加载模块的能力集合：每个 hook 入口独立可选，
// 入口缺省即不具备该能力，分发器只会调用已声明的入口
#[derive(Clone)]
pub struct Module {
    pub name: String,
    pub fork_and_specialize_pre: Option<ForkAndSpecializePreFunc>,
    pub fork_and_specialize_post: Option<ForkAndSpecializePostFunc>,
    pub specialize_app_process_pre: Option<SpecializeAppProcessPreFunc>,
    pub specialize_app_process_post: Option<SpecializeAppProcessPostFunc>,
    pub fork_system_server_pre: Option<ForkSystemServerPreFunc>,
    pub fork_system_server_post: Option<ForkSystemServerPostFunc>,
    pub should_skip_uid: Option<ShouldSkipUidFunc>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fork_and_specialize_pre: None,
            fork_and_specialize_post: None,
            specialize_app_process_pre: None,
            specialize_app_process_post: None,
            fork_system_server_pre: None,
            fork_system_server_post: None,
            should_skip_uid: None,
        }
    }
}

pub fn get_version() -> u32 {
    crate::version::version()
}

pub fn get_version_str() -> &'static str {
    crate::version::version_str()
}

pub fn set_debug(debug: bool) {
    crate::log::set_debug_enabled(debug);
}

pub fn get_debug() -> bool {
    crate::log::debug_enabled()
}

// 注册一个模块，仅追加；注册须在任何 trampoline 运行之前完成
pub fn register_module(module: Module) -> Errno {
    hooks::registry::register(module)
}

pub fn module_count() -> usize {
    hooks::registry::count()
}

// 以下单元均为一次性写入：首次写入生效，之后的写入被拒绝
pub fn set_fork_and_specialize_func(func: *mut c_void) -> Errno {
    hooks::slots::set_fork_and_specialize(func)
}

pub fn set_specialize_app_process_func(func: *mut c_void) -> Errno {
    hooks::slots::set_specialize_app_process(func)
}

pub fn set_fork_system_server_func(func: *mut c_void) -> Errno {
    hooks::slots::set_fork_system_server(func)
}

pub fn set_system_properties_set_func(func: *mut c_void) -> Errno {
    hooks::slots::set_system_properties_set(func)
}

pub fn set_restore_func(func: RestoreFunc) -> Errno {
    hooks::slots::set_restore(func)
}
