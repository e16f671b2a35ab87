// 两阶段扇出：pre -> 原始调用 -> post，单次调用内严格顺序执行
// pre 阶段按注册顺序遍历模块，uid 过滤使用遍历时刻的当前值——
// 前面的模块改写 uid 后，后面的模块以新值做过滤判定（刻意保留的顺序依赖，
// 允许模块通过改映射对后续模块"隐藏"某个 uid）
use super::args::{ForkAndSpecializeArgs, ForkSystemServerArgs, SpecializeAppProcessArgs};
use super::{filter, registry, slots};
use crate::log;
use jni_sys::{JNIEnv, jclass, jint};

pub(crate) unsafe fn fork_and_specialize_pre(
    env: *mut JNIEnv,
    clazz: jclass,
    args: &mut ForkAndSpecializeArgs,
) {
    registry::with_modules(|modules| {
        for module in modules {
            let Some(pre) = module.fork_and_specialize_pre else {
                continue;
            };
            if filter::module_skips_uid(module, args.uid) {
                continue;
            }
            pre(env, clazz, args);
        }
    });
}

pub(crate) unsafe fn fork_and_specialize_post(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: jint,
    res: jint,
) {
    // 成功侧先恢复被临时替换的 native 方法表项，再通知模块
    if res == 0 {
        slots::restore_replaced(env);
    }

    registry::with_modules(|modules| {
        for module in modules {
            let Some(post) = module.fork_and_specialize_post else {
                continue;
            };
            if filter::module_skips_uid(module, uid) {
                continue;
            }

            // zygote 内在 fork 失败侧打日志曾触发 liblog futex 卡死，
            // 成因不明，仅在 res == 0 时输出
            if res == 0 {
                log::debug(format_args!("{}: fork_and_specialize_post", module.name));
            }
            post(env, clazz, res);
        }
    });
}

// specialize 家族就地特化当前进程，不经过 uid 过滤
pub(crate) unsafe fn specialize_app_process_pre(
    env: *mut JNIEnv,
    clazz: jclass,
    args: &mut SpecializeAppProcessArgs,
) {
    registry::with_modules(|modules| {
        for module in modules {
            let Some(pre) = module.specialize_app_process_pre else {
                continue;
            };
            pre(env, clazz, args);
        }
    });
}

// 该家族无返回值：恢复与 post 扇出无条件执行
pub(crate) unsafe fn specialize_app_process_post(env: *mut JNIEnv, clazz: jclass) {
    slots::restore_replaced(env);

    registry::with_modules(|modules| {
        for module in modules {
            let Some(post) = module.specialize_app_process_post else {
                continue;
            };
            log::debug(format_args!("{}: specialize_app_process_post", module.name));
            post(env, clazz);
        }
    });
}

// system server 不在应用 uid 范围内，声明了该能力的模块总是收到回调
pub(crate) unsafe fn fork_system_server_pre(
    env: *mut JNIEnv,
    clazz: jclass,
    args: &mut ForkSystemServerArgs,
) {
    registry::with_modules(|modules| {
        for module in modules {
            let Some(pre) = module.fork_system_server_pre else {
                continue;
            };
            pre(env, clazz, args);
        }
    });
}

pub(crate) unsafe fn fork_system_server_post(env: *mut JNIEnv, clazz: jclass, res: jint) {
    registry::with_modules(|modules| {
        for module in modules {
            let Some(post) = module.fork_system_server_post else {
                continue;
            };
            if res == 0 {
                log::debug(format_args!("{}: fork_system_server_post", module.name));
            }
            post(env, clazz, res);
        }
    });
}
