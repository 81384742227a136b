// JNI plumbing shared by every bridge call: locating the host activity,
// invoking its helpers and polling the static result slots.

use jni::objects::{JClass, JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};
use ndk_context::android_context;
use std::time::Duration;

use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::poll::poll_until;

fn get_app_class_loader<'a>(env: &mut JNIEnv<'a>) -> Result<JObject<'a>, BridgeError> {
    // ActivityThread.currentActivityThread()
    let at_cls = env
        .find_class("android/app/ActivityThread")
        .map_err(|e| BridgeError::Other(format!("ActivityThread not found: {}", e)))?;
    let at = env
        .call_static_method(
            &at_cls,
            "currentActivityThread",
            "()Landroid/app/ActivityThread;",
            &[],
        )
        .map_err(|e| BridgeError::Other(format!("currentActivityThread failed: {}", e)))?
        .l()
        .map_err(|e| BridgeError::Other(format!("currentActivityThread invalid: {}", e)))?;

    let app = env
        .call_method(&at, "getApplication", "()Landroid/app/Application;", &[])
        .map_err(|e| BridgeError::Other(format!("getApplication failed: {}", e)))?
        .l()
        .map_err(|e| BridgeError::Other(format!("getApplication invalid: {}", e)))?;

    // Before the application object exists only the system context has a loader
    let owner = if app.is_null() {
        env.call_method(&at, "getSystemContext", "()Landroid/app/ContextImpl;", &[])
            .map_err(|e| BridgeError::Other(format!("getSystemContext failed: {}", e)))?
            .l()
            .map_err(|e| BridgeError::Other(format!("getSystemContext invalid: {}", e)))?
    } else {
        app
    };

    env.call_method(&owner, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
        .map_err(|e| BridgeError::Other(format!("getClassLoader failed: {}", e)))?
        .l()
        .map_err(|e| BridgeError::Other(format!("getClassLoader invalid: {}", e)))
}

fn load_class<'a>(
    env: &mut JNIEnv<'a>,
    loader: &JObject<'a>,
    fq_slash: &str,
) -> Result<JClass<'a>, BridgeError> {
    // ClassLoader.loadClass wants the dotted form
    let fq_dot = fq_slash.replace('/', ".");
    let name: JString = env
        .new_string(fq_dot)
        .map_err(|e| BridgeError::Other(format!("new_string failed: {}", e)))?;
    let cls_obj = env
        .call_method(
            loader,
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&JObject::from(name))],
        )
        .map_err(|e| BridgeError::Other(format!("ClassLoader.loadClass failed: {}", e)))?
        .l()
        .map_err(|e| BridgeError::Other(format!("loadClass invalid: {}", e)))?;
    Ok(JClass::from(cls_obj))
}

fn get_activity_instance<'a>(
    env: &mut JNIEnv<'a>,
    config: &BridgeConfig,
) -> Result<(JObject<'a>, JClass<'a>), BridgeError> {
    let loader = get_app_class_loader(env)?;
    let cls = load_class(env, &loader, &config.main_activity_class)?;
    let signature = format!("()L{};", config.main_activity_class);

    let instance = match env.call_static_method(&cls, "getInstance", &signature, &[]) {
        Ok(val) => val
            .l()
            .map_err(|e| BridgeError::Other(format!("getInstance() invalid: {}", e)))?,
        Err(_) => {
            if env.exception_check().unwrap_or(false) {
                let _ = env.exception_clear();
            }

            // Kotlin companion without @JvmStatic
            let comp_signature = format!("L{}$Companion;", config.main_activity_class);
            let comp_obj = env
                .get_static_field(&cls, "Companion", &comp_signature)
                .map_err(|e| BridgeError::Other(format!("Failed to get Companion field: {}", e)))?
                .l()
                .map_err(|e| BridgeError::Other(format!("Companion field invalid: {}", e)))?;

            if comp_obj.is_null() {
                return Err(BridgeError::Other(
                    "MainActivity.Companion is null, activity not initialized?".to_string(),
                ));
            }

            env.call_method(&comp_obj, "getInstance", &signature, &[])
                .map_err(|e| BridgeError::Other(format!("Companion.getInstance() failed: {}", e)))?
                .l()
                .map_err(|e| {
                    BridgeError::Other(format!("Companion.getInstance() invalid: {}", e))
                })?
        }
    };

    if instance.is_null() {
        return Err(BridgeError::Other(
            "MainActivity instance is null, activity not initialized?".to_string(),
        ));
    }

    Ok((instance, cls))
}

/// Attaches the current thread and runs `f` against the host activity
pub(crate) fn with_activity<T, F>(config: &BridgeConfig, f: F) -> Result<T, BridgeError>
where
    F: for<'a> FnOnce(&mut JNIEnv<'a>, &JObject<'a>, &JClass<'a>) -> Result<T, BridgeError>,
{
    let vm_ptr = android_context().vm() as *mut *const jni::sys::JNIInvokeInterface_;
    let vm = unsafe { JavaVM::from_raw(vm_ptr) }
        .map_err(|e| BridgeError::Other(format!("JavaVM failed: {}", e)))?;
    let mut guard = vm
        .attach_current_thread()
        .map_err(|e| BridgeError::Other(format!("JNI attach failed: {}", e)))?;
    let env: &mut JNIEnv = &mut guard;

    let (activity, cls) = get_activity_instance(env, config)?;
    f(env, &activity, &cls)
}

/// Empties the error and every result slot before a new request, so an
/// answer that arrived after an earlier request gave up is never reused
pub(crate) fn clear_slots<'a>(env: &mut JNIEnv<'a>, cls: &JClass<'a>) -> Result<(), BridgeError> {
    for method in ["clearLastError", "clearResults"] {
        env.call_static_method(cls, method, "()V", &[])
            .map_err(|e| BridgeError::Other(format!("{} failed: {}", method, e)))?;
    }
    Ok(())
}

/// Calls `activity.method(arg: String)`
pub(crate) fn call_with_string<'a>(
    env: &mut JNIEnv<'a>,
    activity: &JObject<'a>,
    method: &str,
    arg: &str,
) -> Result<(), BridgeError> {
    let jarg: JString = env
        .new_string(arg)
        .map_err(|e| BridgeError::Other(format!("new_string failed: {}", e)))?;
    env.call_method(
        activity,
        method,
        "(Ljava/lang/String;)V",
        &[JValue::Object(&JObject::from(jarg))],
    )
    .map_err(|e| BridgeError::Other(format!("{} failed: {}", method, e)))?;
    Ok(())
}

/// Reads a nullable static `String` getter
pub(crate) fn read_static_string<'a>(
    env: &mut JNIEnv<'a>,
    cls: &JClass<'a>,
    getter: &str,
) -> Result<Option<String>, BridgeError> {
    let obj = env
        .call_static_method(cls, getter, "()Ljava/lang/String;", &[])
        .map_err(|e| BridgeError::Other(format!("{} failed: {}", getter, e)))?
        .l()
        .map_err(|e| BridgeError::Other(format!("{} invalid: {}", getter, e)))?;
    if obj.is_null() {
        return Ok(None);
    }
    let value: String = env
        .get_string(&JString::from(obj))
        .map_err(|e| BridgeError::Other(format!("String conversion failed: {}", e)))?
        .into();
    Ok(Some(value))
}

/// Polls `getter` until the host fills the slot or reports an error
///
/// `timeout` of `None` waits indefinitely.
pub(crate) async fn await_result(
    config: &BridgeConfig,
    getter: &str,
    timeout: Option<Duration>,
) -> Result<String, BridgeError> {
    poll_until(getter, timeout, config.poll_interval, || {
        with_activity(config, |env, _activity, cls| {
            if let Some(value) = read_static_string(env, cls, getter)? {
                return Ok(Some(value));
            }
            if let Some(err) = read_static_string(env, cls, "getLastError")? {
                return Err(BridgeError::Other(err));
            }
            Ok(None)
        })
    })
    .await
}
