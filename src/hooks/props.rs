// SystemProperties.set 守卫
//
// Android 9+ 上极低概率地，SystemProperties.set("sys.user." + userId + ".ce_available", "true")
// 会抛出 RuntimeException，随后 PackageManager 以"准备失败"为由销毁用户数据：
//   UserDataPreparer: Setting property: sys.user.0.ce_available=true
//   PackageManager: Destroying user 0 on volume null because we failed to prepare:
//       java.lang.RuntimeException: failed to set system property
// 拦截该调用并清掉这一个 key 上的 pending 异常，阻止数据被清除。
// 其他任何 key 的异常状态原样保留，这不是通用的异常吞噬设施。
use super::{jnienv, slots};
use crate::api::SystemPropertiesSetFunc;
use crate::log;
use jni_sys::{JNIEnv, jobject, jstring};
use once_cell::sync::Lazy;
use regex::Regex;

// 仅这一种属性名形状：sys.user.<非点号 token>.ce_available
static CE_AVAILABLE_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^sys\.user\.[^.]+\.ce_available$").expect("ce_available key pattern")
});

fn is_ce_available_key(key: &str) -> bool {
    CE_AVAILABLE_KEY.is_match(key)
}

pub unsafe extern "system" fn system_properties_set(
    env: *mut JNIEnv,
    clazz: jobject,
    key: jstring,
    value: jstring,
) {
    let no_throw = jnienv::get_string_utf(env, key)
        .map(|text| is_ce_available_key(&text))
        .unwrap_or(false);

    let func: SystemPropertiesSetFunc = std::mem::transmute(slots::system_properties_set_addr());
    func(env, clazz, key, value);

    if jnienv::exception_occurred(env) && no_throw {
        log::warn(format_args!("prevented data destroy"));

        jnienv::exception_describe(env);
        jnienv::exception_clear(env);
    }
}
