// specialize-app-process 适配函数的单元测试
use super::{
    specialize_app_process_q, specialize_app_process_q_alternative, specialize_app_process_r,
    specialize_app_process_r_dp2, specialize_app_process_r_dp3, specialize_app_process_samsung_q,
};
use crate::api::Module;
use crate::errno::Errno;
use crate::hooks::args::SpecializeAppProcessArgs;
use crate::hooks::{registry, slots, testsupport};
use jni_sys::{JNI_FALSE, JNI_TRUE, JNIEnv, jboolean, jclass, jint, jintArray, jobjectArray, jstring};
use std::ffi::c_void;
use std::sync::Mutex;

static EVENTS: Mutex<Vec<String>> = Mutex::new(Vec::new());

fn push_event(event: String) {
    EVENTS.lock().unwrap().push(event);
}

fn take_events() -> Vec<String> {
    std::mem::take(&mut *EVENTS.lock().unwrap())
}

unsafe extern "C" fn pre_mutate(
    _env: *mut JNIEnv,
    _clazz: jclass,
    args: *mut SpecializeAppProcessArgs,
) {
    let args = &mut *args;
    push_event(format!(
        "pre uid={} top={} pkg={:x} wl={:x} bind_data={} bind_storage={}",
        args.uid,
        args.is_top_app,
        args.pkg_data_info_list as usize,
        args.whitelisted_data_info_list as usize,
        args.bind_mount_app_data_dirs,
        args.bind_mount_app_storage_dirs,
    ));
    // 头部字段与尾部字段一样可变，改写必须抵达原始调用
    args.uid = 10333;
    args.nice_name = 0x99 as jstring;
}

unsafe extern "C" fn post_record(_env: *mut JNIEnv, _clazz: jclass) {
    push_event("post".to_string());
}

unsafe extern "C" fn restore_record(_env: *mut JNIEnv) {
    push_event("restore".to_string());
}

unsafe extern "system" fn orig_q(
    _env: *mut JNIEnv,
    _clazz: jclass,
    uid: jint,
    _gid: jint,
    _gids: jintArray,
    _runtime_flags: jint,
    _rlimits: jobjectArray,
    _mount_external: jint,
    _se_info: jstring,
    nice_name: jstring,
    start_child_zygote: jboolean,
    _instruction_set: jstring,
    _app_data_dir: jstring,
) {
    push_event(format!(
        "orig uid={uid} name={:x} child={start_child_zygote}",
        nice_name as usize,
    ));
}

unsafe extern "system" fn orig_samsung_q(
    _env: *mut JNIEnv,
    _clazz: jclass,
    uid: jint,
    _gid: jint,
    _gids: jintArray,
    _runtime_flags: jint,
    _rlimits: jobjectArray,
    _mount_external: jint,
    _se_info: jstring,
    space: jint,
    access_info: jint,
    nice_name: jstring,
    _start_child_zygote: jboolean,
    _instruction_set: jstring,
    _app_data_dir: jstring,
) {
    push_event(format!(
        "orig uid={uid} space={space} access={access_info} name={:x}",
        nice_name as usize,
    ));
}

unsafe extern "system" fn orig_q_alternative(
    _env: *mut JNIEnv,
    _clazz: jclass,
    uid: jint,
    _gid: jint,
    _gids: jintArray,
    _runtime_flags: jint,
    _rlimits: jobjectArray,
    _mount_external: jint,
    _se_info: jstring,
    nice_name: jstring,
    _start_child_zygote: jboolean,
    _instruction_set: jstring,
    _app_data_dir: jstring,
    is_top_app: jboolean,
) {
    push_event(format!(
        "orig uid={uid} name={:x} top={is_top_app}",
        nice_name as usize,
    ));
}

unsafe extern "system" fn orig_r(
    _env: *mut JNIEnv,
    _clazz: jclass,
    uid: jint,
    _gid: jint,
    _gids: jintArray,
    _runtime_flags: jint,
    _rlimits: jobjectArray,
    _mount_external: jint,
    _se_info: jstring,
    nice_name: jstring,
    _start_child_zygote: jboolean,
    _instruction_set: jstring,
    _app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
    whitelisted_data_info_list: jobjectArray,
    bind_mount_app_data_dirs: jboolean,
    bind_mount_app_storage_dirs: jboolean,
) {
    push_event(format!(
        "orig uid={uid} name={:x} top={is_top_app} pkg={:x} wl={:x} \
         bind_data={bind_mount_app_data_dirs} bind_storage={bind_mount_app_storage_dirs}",
        nice_name as usize, pkg_data_info_list as usize, whitelisted_data_info_list as usize,
    ));
}

unsafe extern "system" fn orig_r_dp3(
    _env: *mut JNIEnv,
    _clazz: jclass,
    uid: jint,
    _gid: jint,
    _gids: jintArray,
    _runtime_flags: jint,
    _rlimits: jobjectArray,
    _mount_external: jint,
    _se_info: jstring,
    _nice_name: jstring,
    _start_child_zygote: jboolean,
    _instruction_set: jstring,
    _app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
    bind_mount_app_storage_dirs: jboolean,
) {
    push_event(format!(
        "orig uid={uid} top={is_top_app} pkg={:x} bind_storage={bind_mount_app_storage_dirs}",
        pkg_data_info_list as usize,
    ));
}

unsafe extern "system" fn orig_r_dp2(
    _env: *mut JNIEnv,
    _clazz: jclass,
    uid: jint,
    _gid: jint,
    _gids: jintArray,
    _runtime_flags: jint,
    _rlimits: jobjectArray,
    _mount_external: jint,
    _se_info: jstring,
    _nice_name: jstring,
    _start_child_zygote: jboolean,
    _instruction_set: jstring,
    _app_data_dir: jstring,
    is_top_app: jboolean,
    pkg_data_info_list: jobjectArray,
) {
    push_event(format!(
        "orig uid={uid} top={is_top_app} pkg={:x}",
        pkg_data_info_list as usize,
    ));
}

fn setup(orig: *mut c_void) {
    testsupport::reset_state();
    take_events();
    assert_eq!(slots::set_specialize_app_process(orig), Errno::Ok);
    assert_eq!(slots::set_restore(restore_record), Errno::Ok);

    let mut module = Module::new("spec");
    module.specialize_app_process_pre = Some(pre_mutate);
    module.specialize_app_process_post = Some(post_record);
    assert_eq!(registry::register(module), Errno::Ok);
}

#[test]
fn q_defaults_tail_and_flows_head_rewrites() {
    let _guard = testsupport::serial();
    setup(orig_q as *mut c_void);

    unsafe {
        specialize_app_process_q(
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            // 该家族不做 uid 过滤，系统 uid 也要分发
            1000,
            1000,
            0x10 as jintArray,
            0,
            0x20 as jobjectArray,
            1,
            0x30 as jstring,
            0x40 as jstring,
            JNI_FALSE,
            0x60 as jstring,
            0x70 as jstring,
        );
    }

    // 无返回值家族：恢复与 post 无条件执行，且恢复先于 post
    assert_eq!(
        take_events(),
        [
            "pre uid=1000 top=0 pkg=0 wl=0 bind_data=0 bind_storage=0",
            "orig uid=10333 name=99 child=0",
            "restore",
            "post",
        ]
    );
}

#[test]
fn q_alternative_defaults_tail_beyond_top() {
    let _guard = testsupport::serial();
    setup(orig_q_alternative as *mut c_void);

    unsafe {
        specialize_app_process_q_alternative(
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            1000,
            1000,
            0x10 as jintArray,
            0,
            0x20 as jobjectArray,
            1,
            0x30 as jstring,
            0x40 as jstring,
            JNI_FALSE,
            0x60 as jstring,
            0x70 as jstring,
            JNI_TRUE,
        );
    }

    assert_eq!(
        take_events(),
        [
            "pre uid=1000 top=1 pkg=0 wl=0 bind_data=0 bind_storage=0",
            "orig uid=10333 name=99 top=1",
            "restore",
            "post",
        ]
    );
}

#[test]
fn r_forwards_full_tail_including_rewrites() {
    let _guard = testsupport::serial();
    setup(orig_r as *mut c_void);

    unsafe {
        specialize_app_process_r(
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            10005,
            10005,
            0x10 as jintArray,
            0,
            0x20 as jobjectArray,
            1,
            0x30 as jstring,
            0x40 as jstring,
            JNI_FALSE,
            0x60 as jstring,
            0x70 as jstring,
            JNI_TRUE,
            0x80 as jobjectArray,
            0x81 as jobjectArray,
            JNI_TRUE,
            JNI_FALSE,
        );
    }

    assert_eq!(
        take_events(),
        [
            "pre uid=10005 top=1 pkg=80 wl=81 bind_data=1 bind_storage=0",
            "orig uid=10333 name=99 top=1 pkg=80 wl=81 bind_data=1 bind_storage=0",
            "restore",
            "post",
        ]
    );
}

#[test]
fn r_dp3_defaults_absent_tail_fields() {
    let _guard = testsupport::serial();
    setup(orig_r_dp3 as *mut c_void);

    unsafe {
        specialize_app_process_r_dp3(
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            10005,
            10005,
            0x10 as jintArray,
            0,
            0x20 as jobjectArray,
            1,
            0x30 as jstring,
            0x40 as jstring,
            JNI_FALSE,
            0x60 as jstring,
            0x70 as jstring,
            JNI_TRUE,
            0x80 as jobjectArray,
            JNI_TRUE,
        );
    }

    assert_eq!(
        take_events(),
        [
            // whitelistedDataInfoList / bindMountAppDataDirs 不在本 ABI 中，默认空
            "pre uid=10005 top=1 pkg=80 wl=0 bind_data=0 bind_storage=1",
            "orig uid=10333 top=1 pkg=80 bind_storage=1",
            "restore",
            "post",
        ]
    );
}

#[test]
fn r_dp2_defaults_absent_tail_fields() {
    let _guard = testsupport::serial();
    setup(orig_r_dp2 as *mut c_void);

    unsafe {
        specialize_app_process_r_dp2(
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            10005,
            10005,
            0x10 as jintArray,
            0,
            0x20 as jobjectArray,
            1,
            0x30 as jstring,
            0x40 as jstring,
            JNI_FALSE,
            0x60 as jstring,
            0x70 as jstring,
            JNI_TRUE,
            0x80 as jobjectArray,
        );
    }

    assert_eq!(
        take_events(),
        [
            "pre uid=10005 top=1 pkg=80 wl=0 bind_data=0 bind_storage=0",
            "orig uid=10333 top=1 pkg=80",
            "restore",
            "post",
        ]
    );
}

#[test]
fn samsung_q_threads_vendor_fields_past_the_hooks() {
    let _guard = testsupport::serial();
    setup(orig_samsung_q as *mut c_void);

    unsafe {
        specialize_app_process_samsung_q(
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            10005,
            10005,
            0x10 as jintArray,
            0,
            0x20 as jobjectArray,
            1,
            0x30 as jstring,
            7,
            9,
            0x40 as jstring,
            JNI_FALSE,
            0x60 as jstring,
            0x70 as jstring,
        );
    }

    assert_eq!(
        take_events(),
        [
            "pre uid=10005 top=0 pkg=0 wl=0 bind_data=0 bind_storage=0",
            "orig uid=10333 space=7 access=9 name=99",
            "restore",
            "post",
        ]
    );
}
