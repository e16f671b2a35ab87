// nativeForkSystemServer 的 ABI 变体
// system server 不在应用 uid 范围内，本家族的分发不经过 uid 过滤
use crate::hooks::args::ForkSystemServerArgs;
use crate::hooks::{dispatch, slots};
use jni_sys::{JNIEnv, jclass, jint, jintArray, jlong, jobjectArray};
use libc::{gid_t, uid_t};
use std::mem::transmute;

type ForkSystemServerFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: uid_t,
    gid: gid_t,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    permitted_capabilities: jlong,
    effective_capabilities: jlong,
) -> jint;

type ForkSystemServerSamsungQFn = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: uid_t,
    gid: gid_t,
    gids: jintArray,
    runtime_flags: jint,
    space: jint,
    access_info: jint,
    rlimits: jobjectArray,
    permitted_capabilities: jlong,
    effective_capabilities: jlong,
) -> jint;

// 历代 AOSP 共用的形状
pub unsafe extern "system" fn fork_system_server(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: uid_t,
    gid: gid_t,
    gids: jintArray,
    runtime_flags: jint,
    rlimits: jobjectArray,
    permitted_capabilities: jlong,
    effective_capabilities: jlong,
) -> jint {
    let mut args = ForkSystemServerArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        permitted_capabilities,
        effective_capabilities,
    };

    dispatch::fork_system_server_pre(env, clazz, &mut args);

    let orig: ForkSystemServerFn = transmute(slots::fork_system_server_addr());
    let res = orig(
        env,
        clazz,
        args.uid,
        args.gid,
        args.gids,
        args.runtime_flags,
        args.rlimits,
        args.permitted_capabilities,
        args.effective_capabilities,
    );

    dispatch::fork_system_server_post(env, clazz, res);
    res
}

// Samsung Android 10：runtime_flags 后插入 space/access_info，hook 不感知
pub unsafe extern "system" fn fork_system_server_samsung_q(
    env: *mut JNIEnv,
    clazz: jclass,
    uid: uid_t,
    gid: gid_t,
    gids: jintArray,
    runtime_flags: jint,
    space: jint,
    access_info: jint,
    rlimits: jobjectArray,
    permitted_capabilities: jlong,
    effective_capabilities: jlong,
) -> jint {
    let mut args = ForkSystemServerArgs {
        uid,
        gid,
        gids,
        runtime_flags,
        rlimits,
        permitted_capabilities,
        effective_capabilities,
    };

    dispatch::fork_system_server_pre(env, clazz, &mut args);

    let orig: ForkSystemServerSamsungQFn = transmute(slots::fork_system_server_addr());
    let res = orig(
        env,
        clazz,
        args.uid,
        args.gid,
        args.gids,
        args.runtime_flags,
        space,
        access_info,
        args.rlimits,
        args.permitted_capabilities,
        args.effective_capabilities,
    );

    dispatch::fork_system_server_post(env, clazz, res);
    res
}
