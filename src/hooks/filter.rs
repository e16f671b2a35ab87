// uid 过滤策略：默认只对常规应用 uid 放行 hook
// hook 系统服务 uid 会导致守护进程异常（zygote 无故死亡且不留线索），因此默认跳过
use crate::api::Module;
use jni_sys::jint;

// appId 为 uid 的低五位十进制，常规应用落在保留区间 [10000, 19999]
// https://android.googlesource.com/platform/frameworks/base/+/android-9.0.0_r8/core/java/android/os/UserHandle.java#151
pub(crate) fn is_app_uid(uid: jint) -> bool {
    let app_id = uid % 100000;
    (10000..=19999).contains(&app_id)
}

pub(crate) fn should_skip_uid(uid: jint) -> bool {
    !is_app_uid(uid)
}

// 模块声明了自定义过滤器时，其裁决完全取代默认策略，且只影响该模块自身
pub(crate) unsafe fn module_skips_uid(module: &Module, uid: jint) -> bool {
    match module.should_skip_uid {
        Some(filter) => filter(uid),
        None => should_skip_uid(uid),
    }
}
