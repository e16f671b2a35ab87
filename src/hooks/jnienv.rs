// 原生 JNI 接口访问的薄封装，props 守卫经由此处读取字符串与异常状态
// cfg(test) 下整体替换为线程局部 mock，使守卫逻辑无需 JVM 即可验证

#[cfg(not(test))]
mod real {
    use jni_sys::{JNIEnv, jstring};
    use std::ffi::CStr;

    // 读取 Java 字符串内容；句柄为空或 VM 拒绝时返回 None
    pub(crate) unsafe fn get_string_utf(env: *mut JNIEnv, s: jstring) -> Option<String> {
        if s.is_null() {
            return None;
        }
        let chars = ((**env).GetStringUTFChars.unwrap())(env, s, std::ptr::null_mut());
        if chars.is_null() {
            return None;
        }
        let text = CStr::from_ptr(chars).to_string_lossy().into_owned();
        ((**env).ReleaseStringUTFChars.unwrap())(env, s, chars);
        Some(text)
    }

    pub(crate) unsafe fn exception_occurred(env: *mut JNIEnv) -> bool {
        !((**env).ExceptionOccurred.unwrap())(env).is_null()
    }

    pub(crate) unsafe fn exception_describe(env: *mut JNIEnv) {
        ((**env).ExceptionDescribe.unwrap())(env);
    }

    pub(crate) unsafe fn exception_clear(env: *mut JNIEnv) {
        ((**env).ExceptionClear.unwrap())(env);
    }
}

#[cfg(not(test))]
pub(crate) use real::{exception_clear, exception_describe, exception_occurred, get_string_utf};


#[cfg(test)]
pub(crate) use mock::{
    exception_clear, exception_describe, exception_described, exception_occurred,
    exception_pending, get_string_utf, set_exception_pending, set_string_text,
};
